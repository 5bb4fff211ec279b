use super::input_validation_function::{
    validate_input_shape_dims, validate_non_empty, validate_spatial_extent,
};
use super::*;
use ndarray::{ArrayBase, ArrayD, Data, IxDyn};

impl ConvPoolBase {
    /// Derives the output shape for a 4D input.
    ///
    /// The output channel count is supplied by the caller since an operator may change it.
    /// Pads resolved along the way are stored in the configuration.
    ///
    /// # Parameters
    ///
    /// - `input_shape` - `[batch_size, channels, height, width]` for `NCHW`,
    ///   `[batch_size, height, width, channels]` for `NHWC`
    /// - `output_channel` - Channel count of the output
    ///
    /// # Returns
    ///
    /// - `Result<[usize; 4], ConvPoolError>` - Output shape in the configured storage order
    ///
    /// # Errors
    ///
    /// - `ConvPoolError::ShapeError` - If the input is not 4D, is empty, or a spatial extent is
    ///   smaller than the kernel
    /// - `ConvPoolError::InternalConsistencyFault` - See [`compute_size_and_pad`]
    pub fn derive_shape(
        &mut self,
        input_shape: &[usize],
        output_channel: usize,
    ) -> Result<[usize; 4], ConvPoolError> {
        let order = self.config().get_storage_order();
        validate_input_shape_dims(input_shape, 4, order)?;
        validate_non_empty(input_shape)?;

        let (h_axis, w_axis) = order.spatial_axes();
        let (height, width) = (input_shape[h_axis], input_shape[w_axis]);
        validate_spatial_extent("height", height, self.config().get_kernel_h())?;
        validate_spatial_extent("width", width, self.config().get_kernel_w())?;

        let (output_height, output_width) = self.compute_sizes_and_pads(height, width)?;
        let output_shape =
            order.assemble(input_shape[0], output_channel, output_height, output_width);

        log::debug!(
            "{}: in {:?} -> out {:?} ({})",
            self.name(),
            input_shape,
            output_shape,
            order
        );
        Ok(output_shape)
    }

    /// Resizes `output` to the shape derived from `input`.
    ///
    /// `output` is reallocated (filled with `A::default()`) only when its shape differs
    /// from the derived one.
    ///
    /// # Errors
    ///
    /// Same as [`ConvPoolBase::derive_shape`].
    pub fn set_output_size<A, S>(
        &mut self,
        input: &ArrayBase<S, IxDyn>,
        output: &mut ArrayD<A>,
        output_channel: usize,
    ) -> Result<(), ConvPoolError>
    where
        A: Clone + Default,
        S: Data,
    {
        let output_shape = self.derive_shape(input.shape(), output_channel)?;
        if output.shape() != output_shape.as_slice() {
            *output = ArrayD::from_elem(IxDyn(&output_shape), A::default());
        }
        Ok(())
    }

    /// Refreshes the pads for the given spatial extents without deriving a shape.
    ///
    /// Meant for routines, such as gradient computations, that need the pads of the current
    /// input. Pads under `Explicit` and `Valid` never depend on the input, so nothing
    /// happens for them.
    ///
    /// # Errors
    ///
    /// Same as [`compute_size_and_pad`].
    pub fn recompute_pads(&mut self, height: usize, width: usize) -> Result<(), ConvPoolError> {
        if self.config().get_padding_policy().recomputes_pads() {
            self.compute_sizes_and_pads(height, width)?;
        }
        Ok(())
    }
}
