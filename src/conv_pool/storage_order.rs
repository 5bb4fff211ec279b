use crate::error::ConvPoolError;

/// Axis ordering of a 4D activation tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageOrder {
    /// `[batch_size, channels, height, width]`
    #[default]
    NCHW,
    /// `[batch_size, height, width, channels]`
    NHWC,
}

impl StorageOrder {
    /// Parses `"NCHW"` or `"NHWC"` (case-insensitive).
    ///
    /// # Errors
    ///
    /// - `ConvPoolError::UnsupportedLayout` - For any other value
    pub fn from_name(name: &str) -> Result<Self, ConvPoolError> {
        match name.to_ascii_uppercase().as_str() {
            "NCHW" => Ok(StorageOrder::NCHW),
            "NHWC" => Ok(StorageOrder::NHWC),
            _ => Err(ConvPoolError::UnsupportedLayout(format!(
                "\"{}\", expected \"NCHW\" or \"NHWC\"",
                name
            ))),
        }
    }

    /// Positions of the height and width axes in a 4D shape.
    pub fn spatial_axes(self) -> (usize, usize) {
        match self {
            StorageOrder::NCHW => (2, 3),
            StorageOrder::NHWC => (1, 2),
        }
    }

    /// Assembles a 4D shape in this order.
    pub fn assemble(self, batch: usize, channels: usize, height: usize, width: usize) -> [usize; 4] {
        match self {
            StorageOrder::NCHW => [batch, channels, height, width],
            StorageOrder::NHWC => [batch, height, width, channels],
        }
    }
}

impl std::fmt::Display for StorageOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageOrder::NCHW => write!(f, "NCHW"),
            StorageOrder::NHWC => write!(f, "NHWC"),
        }
    }
}
