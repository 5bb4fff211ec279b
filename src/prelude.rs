pub use crate::argument::{Argument, OperatorArgs};
pub use crate::conv_pool::{
    AxisExtent, AxisPads, ConvPoolBase, ConvPoolOperator, DEFAULT_SAME_SPLIT, PaddingPolicy,
    SameSplit, SpatialConfig, StorageOrder, compute_size_and_pad,
};
pub use crate::error::ConvPoolError;
