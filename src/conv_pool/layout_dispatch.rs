use super::*;

/// Defines the interface for operators built on [`ConvPoolBase`].
///
/// Concrete operators provide access to their shared state and implement the routine for
/// every storage order they support. Routines left unimplemented report
/// `ConvPoolError::NotImplemented` when selected.
///
/// # Examples
/// ```rust
/// use convpool::argument::OperatorArgs;
/// use convpool::conv_pool::{ConvPoolBase, ConvPoolOperator};
/// use convpool::error::ConvPoolError;
///
/// struct CountWindows {
///     base: ConvPoolBase,
///     input_shape: Vec<usize>,
///     windows: usize,
/// }
///
/// impl ConvPoolOperator for CountWindows {
///     fn base(&self) -> &ConvPoolBase {
///         &self.base
///     }
///
///     fn base_mut(&mut self) -> &mut ConvPoolBase {
///         &mut self.base
///     }
///
///     fn run_with_order_nchw(&mut self) -> Result<(), ConvPoolError> {
///         let channels = self.input_shape[1];
///         let shape = self.base.derive_shape(&self.input_shape, channels)?;
///         self.windows = shape[2] * shape[3];
///         Ok(())
///     }
/// }
///
/// let args = OperatorArgs::new().with("kernel", 2).with("stride", 2);
/// let mut op = CountWindows {
///     base: ConvPoolBase::new("CountWindows", &args).unwrap(),
///     input_shape: vec![1, 3, 6, 6],
///     windows: 0,
/// };
/// op.run_on_device().unwrap();
/// assert_eq!(op.windows, 9);
/// ```
pub trait ConvPoolOperator {
    /// Shared sizing state.
    fn base(&self) -> &ConvPoolBase;

    /// Mutable shared sizing state.
    fn base_mut(&mut self) -> &mut ConvPoolBase;

    /// Routine for `[batch_size, channels, height, width]` inputs.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If the computation finished
    /// - `Err(ConvPoolError)` - `ConvPoolError::NotImplemented` unless overridden
    fn run_with_order_nchw(&mut self) -> Result<(), ConvPoolError> {
        Err(ConvPoolError::NotImplemented(
            "this operator has no NCHW implementation",
        ))
    }

    /// Routine for `[batch_size, height, width, channels]` inputs.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If the computation finished
    /// - `Err(ConvPoolError)` - `ConvPoolError::NotImplemented` unless overridden
    fn run_with_order_nhwc(&mut self) -> Result<(), ConvPoolError> {
        Err(ConvPoolError::NotImplemented(
            "this operator has no NHWC implementation",
        ))
    }

    /// Runs the routine matching the configured storage order.
    fn run_on_device(&mut self) -> Result<(), ConvPoolError> {
        let order = self.base().config().get_storage_order();
        log::trace!("{}: running {}", self.base().name(), order);
        match order {
            StorageOrder::NCHW => self.run_with_order_nchw(),
            StorageOrder::NHWC => self.run_with_order_nhwc(),
        }
    }
}
