use super::*;

/// Names of every argument that sets a pad explicitly.
pub const PAD_ARGUMENTS: [&str; 5] = ["pad", "pad_t", "pad_l", "pad_b", "pad_r"];

/// Converts a validated non-negative argument into `usize`.
fn to_usize(name: &str, value: i64) -> Result<usize, ConvPoolError> {
    usize::try_from(value).map_err(|_| {
        ConvPoolError::ConfigurationError(format!(
            "{} ({}) does not fit into the platform index type",
            name, value
        ))
    })
}

/// Validates that both kernel extents are positive and converts them.
///
/// # Errors
///
/// Returns `ConvPoolError::ConfigurationError` if either extent is not greater than zero.
pub fn validate_kernel_2d(kernel: (i64, i64)) -> Result<(usize, usize), ConvPoolError> {
    if kernel.0 <= 0 || kernel.1 <= 0 {
        return Err(ConvPoolError::ConfigurationError(format!(
            "Kernel size must be greater than zero in all dimensions. Got: ({}, {})",
            kernel.0, kernel.1
        )));
    }
    Ok((to_usize("kernel_h", kernel.0)?, to_usize("kernel_w", kernel.1)?))
}

/// Validates strides against the kernel and converts them.
///
/// # Errors
///
/// Returns `ConvPoolError::ConfigurationError` if:
/// - any stride is not greater than zero
/// - a stride is larger than the kernel extent of the same axis
pub fn validate_strides_2d(
    strides: (i64, i64),
    kernel: (usize, usize),
) -> Result<(usize, usize), ConvPoolError> {
    if strides.0 <= 0 || strides.1 <= 0 {
        return Err(ConvPoolError::ConfigurationError(format!(
            "Strides must be greater than zero. Got: ({}, {})",
            strides.0, strides.1
        )));
    }
    let strides = (to_usize("stride_h", strides.0)?, to_usize("stride_w", strides.1)?);
    if strides.0 > kernel.0 || strides.1 > kernel.1 {
        return Err(ConvPoolError::ConfigurationError(format!(
            "Strides ({}, {}) cannot be greater than kernel size ({}, {})",
            strides.0, strides.1, kernel.0, kernel.1
        )));
    }
    Ok(strides)
}

/// Validates a single pad value and converts it.
///
/// # Errors
///
/// Returns `ConvPoolError::ConfigurationError` if the pad is negative.
pub fn validate_pad(name: &str, pad: i64) -> Result<usize, ConvPoolError> {
    if pad < 0 {
        return Err(ConvPoolError::ConfigurationError(format!(
            "{} must be non-negative. Got: {}",
            name, pad
        )));
    }
    to_usize(name, pad)
}

/// Validates that no pad argument was supplied together with a policy that computes pads itself.
///
/// # Errors
///
/// Returns `ConvPoolError::ConfigurationError` naming the offending arguments.
pub fn validate_no_explicit_pads(
    args: &OperatorArgs,
    policy: PaddingPolicy,
) -> Result<(), ConvPoolError> {
    if !policy.forbids_explicit_pads() {
        return Ok(());
    }
    let supplied: Vec<&str> = PAD_ARGUMENTS
        .iter()
        .copied()
        .filter(|name| args.has_argument(name))
        .collect();
    if !supplied.is_empty() {
        return Err(ConvPoolError::ConfigurationError(format!(
            "If you use padding policy {:?}, you should not specify any specific padding values. Got: {:?}",
            policy, supplied
        )));
    }
    Ok(())
}

/// Validates that the input shape has the expected number of dimensions.
///
/// # Errors
///
/// Returns `ConvPoolError::ShapeError` if the shape length doesn't match expected_dims.
pub fn validate_input_shape_dims(
    input_shape: &[usize],
    expected_dims: usize,
    order: StorageOrder,
) -> Result<(), ConvPoolError> {
    if input_shape.len() != expected_dims {
        let dim_names = match order {
            StorageOrder::NCHW => "[batch_size, channels, height, width]",
            StorageOrder::NHWC => "[batch_size, height, width, channels]",
        };
        return Err(ConvPoolError::ShapeError(format!(
            "Input shape must be {}-dimensional: {} for {}. Got: {:?}",
            expected_dims, dim_names, order, input_shape
        )));
    }
    Ok(())
}

/// Validates that the input holds at least one element.
///
/// # Errors
///
/// Returns `ConvPoolError::ShapeError` if any dimension is 0.
pub fn validate_non_empty(input_shape: &[usize]) -> Result<(), ConvPoolError> {
    if input_shape.iter().product::<usize>() == 0 {
        return Err(ConvPoolError::ShapeError(format!(
            "Input must not be empty. Got shape: {:?}",
            input_shape
        )));
    }
    Ok(())
}

/// Validates that the kernel fits inside the unpadded spatial extent.
///
/// # Errors
///
/// Returns `ConvPoolError::ShapeError` if kernel is greater than the input extent.
pub fn validate_spatial_extent(
    axis: &str,
    extent: usize,
    kernel: usize,
) -> Result<(), ConvPoolError> {
    if extent < kernel {
        return Err(ConvPoolError::ShapeError(format!(
            "Input {} ({}) cannot be smaller than kernel {} ({})",
            axis, extent, axis, kernel
        )));
    }
    Ok(())
}
