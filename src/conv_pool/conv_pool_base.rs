use super::*;

/// State shared by every convolution- or pooling-style operator.
///
/// Owns the operator's `SpatialConfig` together with the operator identity that
/// log records refer to. Concrete operators embed one of these and expose it through
/// [`ConvPoolOperator`](super::ConvPoolOperator).
///
/// # Examples
/// ```rust
/// use convpool::argument::OperatorArgs;
/// use convpool::conv_pool::ConvPoolBase;
///
/// let args = OperatorArgs::new()
///     .with("kernel", 3)
///     .with("stride", 2)
///     .with("padding_policy", "SAME")
///     .with("order", "NHWC");
/// let mut base = ConvPoolBase::new("MaxPool", &args).unwrap();
///
/// // [batch_size, height, width, channels]
/// let output_shape = base.derive_shape(&[1, 5, 5, 8], 8).unwrap();
/// assert_eq!(output_shape, [1, 3, 3, 8]);
/// assert_eq!(base.config().get_pads(), (1, 1, 1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct ConvPoolBase {
    name: String,
    config: SpatialConfig,
}

impl ConvPoolBase {
    /// Creates the shared state from operator arguments with the default `Same` split.
    ///
    /// # Parameters
    ///
    /// - `name` - Operator identity used in log records
    /// - `args` - Operator arguments, see [`SpatialConfig::from_args_with_split`]
    pub fn new(name: &str, args: &OperatorArgs) -> Result<Self, ConvPoolError> {
        Self::with_same_split(name, args, DEFAULT_SAME_SPLIT)
    }

    /// Creates the shared state with an explicit `Same` split convention.
    pub fn with_same_split(
        name: &str,
        args: &OperatorArgs,
        same_split: SameSplit,
    ) -> Result<Self, ConvPoolError> {
        let config = SpatialConfig::from_args_with_split(args, same_split)?;
        log::debug!("{}: created with {:?}", name, config);
        Ok(ConvPoolBase {
            name: name.to_string(),
            config,
        })
    }

    /// Operator identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current configuration, including the pads resolved by the last call.
    pub fn config(&self) -> &SpatialConfig {
        &self.config
    }

    /// Sizes both spatial axes, stores the resolved pads and reports legacy fallbacks.
    pub(crate) fn compute_sizes_and_pads(
        &mut self,
        height: usize,
        width: usize,
    ) -> Result<(usize, usize), ConvPoolError> {
        let h = self.config.compute_height(height)?;
        let w = self.config.compute_width(width)?;
        if h.legacy_fallback || w.legacy_fallback {
            log::warn!(
                "You are hitting a case where Caffe's legacy padding calculation is hit. \
                 This leads to inefficient and sometimes incorrect results. We are keeping \
                 this behavior for backward compatibility, but you are strongly recommended \
                 to move away from it. The operator that generates this warning is: {} \
                 (pads t/b: {}/{}, l/r: {}/{})",
                self.name,
                h.pads.head,
                h.pads.tail,
                w.pads.head,
                w.pads.tail
            );
        }
        self.config.set_height_pads(h.pads);
        self.config.set_width_pads(w.pads);
        Ok((h.out_size, w.out_size))
    }
}
