use super::*;

/// Head and tail pad of one spatial axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisPads {
    pub head: usize,
    pub tail: usize,
}

impl AxisPads {
    /// Creates the pads of one axis from its head and tail amounts.
    pub fn new(head: usize, tail: usize) -> Self {
        AxisPads { head, tail }
    }

    /// Total padding added to the axis, `None` if it does not fit into `usize`.
    pub fn total(&self) -> Option<usize> {
        self.head.checked_add(self.tail)
    }
}

/// Result of sizing one spatial axis.
///
/// # Fields
///
/// - `out_size` - Number of window positions along the axis
/// - `pads` - Pads resolved by the padding policy
/// - `legacy_fallback` - Set when `PaddingPolicy::LegacyPoolingCompat` had to pad the tail
///   beyond the head pad to reach its rounded-up output size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisExtent {
    pub out_size: usize,
    pub pads: AxisPads,
    pub legacy_fallback: bool,
}

impl AxisExtent {
    fn new(out_size: usize, pads: AxisPads) -> Self {
        AxisExtent {
            out_size,
            pads,
            legacy_fallback: false,
        }
    }
}

fn padding_overflow(in_size: usize, pads: AxisPads) -> ConvPoolError {
    ConvPoolError::ConfigurationError(format!(
        "padded extent overflows (in: {}, pads: {}/{})",
        in_size, pads.head, pads.tail
    ))
}

/// Number of window positions when the window fits `padded` elements, rounded down.
fn floor_out_size(padded: usize, stride: usize, kernel: usize) -> Result<usize, ConvPoolError> {
    let span = padded.checked_sub(kernel).ok_or_else(|| {
        ConvPoolError::ShapeError(format!(
            "kernel ({}) does not fit into the padded extent ({})",
            kernel, padded
        ))
    })?;
    Ok(span / stride + 1)
}

/// Computes the output extent of one spatial axis and resolves its pads.
///
/// The supplied `pads` are read by `Explicit` (both sides) and `LegacyPoolingCompat`
/// (head only) and ignored by `Valid` and `Same`. The pads the window is actually run
/// with are returned in the result.
///
/// - `Explicit`: `out = (in + head + tail - kernel) / stride + 1`
/// - `Valid`: pads are zero, `out = (in - kernel) / stride + 1`
/// - `Same`: `out = ceil(in / stride)`, the padding needed for that is split by `split`
/// - `LegacyPoolingCompat`: `out = ceil((in + 2 * head - kernel) / stride) + 1`, minus one when
///   the last window would start inside the tail padding; the tail pad grows by `stride`
///   for every position beyond the rounded-down size
///
/// # Parameters
///
/// - `in_size` - Input extent along the axis
/// - `stride` - Window step
/// - `kernel` - Window extent
/// - `pads` - Current head and tail pad
/// - `policy` - Padding policy
/// - `split` - Side receiving the extra unit of odd `Same` padding
///
/// # Returns
///
/// - `Result<AxisExtent, ConvPoolError>` - Output extent and resolved pads
///
/// # Errors
///
/// - `ConvPoolError::ConfigurationError` - If `kernel` or `stride` is zero, or the padded extent overflows `usize`
/// - `ConvPoolError::ShapeError` - If `in_size` is zero or the kernel does not fit into the padded extent
/// - `ConvPoolError::InternalConsistencyFault` - If the legacy output size ends up below the rounded-down size
///
/// # Examples
/// ```rust
/// use convpool::conv_pool::{compute_size_and_pad, AxisPads, PaddingPolicy, SameSplit};
///
/// let extent = compute_size_and_pad(
///     5,
///     2,
///     3,
///     AxisPads::default(),
///     PaddingPolicy::Same,
///     SameSplit::TailExtra,
/// )
/// .unwrap();
///
/// assert_eq!(extent.out_size, 3);
/// assert_eq!(extent.pads, AxisPads::new(1, 1));
/// ```
pub fn compute_size_and_pad(
    in_size: usize,
    stride: usize,
    kernel: usize,
    pads: AxisPads,
    policy: PaddingPolicy,
    split: SameSplit,
) -> Result<AxisExtent, ConvPoolError> {
    if kernel == 0 || stride == 0 {
        return Err(ConvPoolError::ConfigurationError(format!(
            "kernel ({}) and stride ({}) must be greater than zero",
            kernel, stride
        )));
    }
    if in_size == 0 {
        return Err(ConvPoolError::ShapeError(
            "input extent must be greater than zero".to_string(),
        ));
    }

    match policy {
        PaddingPolicy::Explicit => {
            let padded = pads
                .total()
                .and_then(|total| in_size.checked_add(total))
                .ok_or_else(|| padding_overflow(in_size, pads))?;
            let out_size = floor_out_size(padded, stride, kernel)?;
            Ok(AxisExtent::new(out_size, pads))
        }
        PaddingPolicy::Valid => {
            let out_size = floor_out_size(in_size, stride, kernel)?;
            Ok(AxisExtent::new(out_size, AxisPads::default()))
        }
        PaddingPolicy::Same => {
            let target = in_size.div_ceil(stride);
            // (target - 1) * stride >= in_size - stride, so this is negative only when stride > kernel
            let padded = ((target - 1) * stride)
                .checked_add(kernel)
                .ok_or_else(|| padding_overflow(in_size, pads))?;
            let pad_needed = padded.checked_sub(in_size).ok_or_else(|| {
                ConvPoolError::ConfigurationError(format!(
                    "stride ({}) cannot be greater than kernel ({}) with SAME padding",
                    stride, kernel
                ))
            })?;
            let head = match split {
                SameSplit::TailExtra => pad_needed / 2,
                SameSplit::HeadExtra => (pad_needed + 1) / 2,
            };
            let pads = AxisPads::new(head, pad_needed - head);
            let out_size = floor_out_size(padded, stride, kernel)?;
            Ok(AxisExtent::new(out_size, pads))
        }
        PaddingPolicy::LegacyPoolingCompat => {
            let head = pads.head;
            let padded = head
                .checked_mul(2)
                .and_then(|both| in_size.checked_add(both))
                .ok_or_else(|| padding_overflow(in_size, pads))?;
            let span = padded.checked_sub(kernel).ok_or_else(|| {
                ConvPoolError::ShapeError(format!(
                    "kernel ({}) does not fit into the padded extent ({})",
                    kernel, padded
                ))
            })?;
            let mut out_size = span.div_ceil(stride) + 1;
            // the last window has to start inside the image, not inside the tail padding
            // in_size + head <= padded; a start that overflows lies beyond it anyway
            let last_start = (out_size - 1).checked_mul(stride);
            if head > 0 && last_start.is_none_or(|start| start >= in_size + head) {
                out_size -= 1;
            }
            let standard_out_size = span / stride + 1;
            if out_size < standard_out_size {
                return Err(ConvPoolError::InternalConsistencyFault(format!(
                    "legacy pooling output size {} is smaller than the standard output size {} (in: {}, kernel: {}, stride: {}, pad: {})",
                    out_size, standard_out_size, in_size, kernel, stride, head
                )));
            }
            let tail = stride
                .checked_mul(out_size - standard_out_size)
                .and_then(|extra| head.checked_add(extra))
                .ok_or_else(|| padding_overflow(in_size, pads))?;
            Ok(AxisExtent {
                out_size,
                pads: AxisPads::new(head, tail),
                legacy_fallback: out_size > standard_out_size,
            })
        }
    }
}
