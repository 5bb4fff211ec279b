use crate::argument::OperatorArgs;
use crate::error::ConvPoolError;

/// State shared by convolution- and pooling-style operators
pub mod conv_pool_base;
/// Validation of operator arguments and input shapes
pub mod input_validation_function;
/// Dispatch to storage-order specific routines
pub mod layout_dispatch;
/// Output shape derivation and pad refresh
pub mod output_shape;
/// Padding policies and the `Same` split convention
pub mod padding_policy;
/// Per-axis output size and pad computation
pub mod size_calculator;
/// Validated kernel/stride/pad configuration
pub mod spatial_config;
/// NCHW / NHWC axis ordering
pub mod storage_order;

pub use conv_pool_base::ConvPoolBase;
pub use layout_dispatch::ConvPoolOperator;
pub use padding_policy::{DEFAULT_SAME_SPLIT, PaddingPolicy, SameSplit};
pub use size_calculator::{AxisExtent, AxisPads, compute_size_and_pad};
pub use spatial_config::SpatialConfig;
pub use storage_order::StorageOrder;
