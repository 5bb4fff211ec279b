//! # convpool
//!
//! Padding and output-size engine shared by convolution- and pooling-style operators.
//!
//! Given the spatial extent of an input, a kernel extent, a stride and a padding policy,
//! the crate computes the pads applied on both sides of each spatial axis and the
//! resulting output extent, then derives (and allocates) the output tensor shape for
//! `NCHW` or `NHWC` data.
//!
//! # Example
//! ```rust
//! use convpool::prelude::*;
//! use ndarray::ArrayD;
//!
//! let args = OperatorArgs::new()
//!     .with("kernel", 3)
//!     .with("stride", 2)
//!     .with("pad", 1);
//! let mut base = ConvPoolBase::new("AveragePool", &args).unwrap();
//!
//! let input = ArrayD::<f32>::zeros(vec![2, 16, 7, 7]);
//! let mut output = ArrayD::<f32>::zeros(vec![0]);
//! base.set_output_size(&input, &mut output, 16).unwrap();
//!
//! assert_eq!(output.shape(), &[2, 16, 4, 4]);
//! ```

/// A macro that generates a getter method for any field.
///
/// This macro creates a public getter method that returns the value
/// of the specified field. The generated method includes appropriate documentation
/// describing the field being accessed.
///
/// # Parameters
///
/// - `$method_name` - The name of the getter method (e.g., get_kernel_h)
/// - `$field_name` - The name of the field to access (e.g., kernel_h)
/// - `$return_type` - The return type of the getter method
///
/// # Generated Method
///
/// The macro generates a method that returns the field value,
/// with documentation that describes what field is being accessed.
macro_rules! get_field {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name
        }
    };
}

/// Error type shared by every part of the crate.
pub mod error;

/// Named operator arguments, the input of operator construction.
pub mod argument;

/// Sizing and padding for 2D sliding-window operators.
///
/// # Components
///
/// - `SpatialConfig` - Validated kernel, stride, pads, padding policy and storage order
/// - `compute_size_and_pad` - Output extent and pads of one spatial axis under a `PaddingPolicy`
/// - `ConvPoolBase` - Operator state; derives output shapes and refreshes pads per call
/// - `ConvPoolOperator` - Dispatches to the `NCHW` or `NHWC` routine of a concrete operator
///
/// # Padding policies
///
/// | Policy | Pads | Output extent |
/// |---|---|---|
/// | `Explicit` | as supplied | `(in + head + tail - k) / s + 1` |
/// | `Valid` | zero | `(in - k) / s + 1` |
/// | `Same` | computed | `ceil(in / s)` |
/// | `LegacyPoolingCompat` | head supplied, tail derived | `ceil((in + 2 * head - k) / s) + 1`, clipped |
pub mod conv_pool;

/// Convenience re-exports of the commonly used types.
pub mod prelude;
