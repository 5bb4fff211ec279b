/// Error types that can occur while configuring or sizing a sliding-window operator
///
/// # Variants
///
/// - `ConfigurationError` - Indicates that the operator arguments are invalid (non-positive kernel or stride, stride larger than kernel, negative pad, explicit pad combined with `VALID`/`SAME`, unknown padding policy)
/// - `ShapeError` - Indicates that the input tensor shape cannot be processed (wrong rank, empty input, kernel larger than the spatial extent)
/// - `UnsupportedLayout` - Indicates a storage order outside of `NCHW`/`NHWC`
/// - `NotImplemented` - Indicates that the concrete operator has no routine for the selected storage order
/// - `InternalConsistencyFault` - Indicates that the legacy pooling output size fell below the standard output size, which means the size computation itself is wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvPoolError {
    ConfigurationError(String),
    ShapeError(String),
    UnsupportedLayout(String),
    NotImplemented(&'static str),
    InternalConsistencyFault(String),
}

impl std::fmt::Display for ConvPoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvPoolError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            ConvPoolError::ShapeError(msg) => write!(f, "Shape error: {}", msg),
            ConvPoolError::UnsupportedLayout(msg) => {
                write!(f, "Unsupported storage order: {}", msg)
            }
            ConvPoolError::NotImplemented(what) => write!(f, "Not implemented: {}", what),
            ConvPoolError::InternalConsistencyFault(msg) => write!(
                f,
                "Internal consistency fault: {}. This should never happen, the size computation logic needs to be double checked",
                msg
            ),
        }
    }
}

impl std::error::Error for ConvPoolError {}
