use crate::argument::Argument;
use crate::error::ConvPoolError;

/// Defines how padding is obtained and how the output extent is derived along a spatial axis.
///
/// - `Explicit`: The supplied head/tail pads are used as they are (`NOTSET`).
/// - `Valid`: No padding is applied, which reduces the output dimensions.
/// - `Same`: Padding is computed so that the output extent is `ceil(input / stride)`.
/// - `LegacyPoolingCompat`: Replicates the old Caffe pooling size rule (`CAFFE_LEGACY_POOLING`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingPolicy {
    /// Pads are taken from the operator arguments. The output extent is rounded down.
    #[default]
    Explicit,

    /// No padding is applied. The window is only placed where it fully overlaps with
    /// the input, resulting in an output with reduced dimensions.
    Valid,

    /// Padding is added around the input so that the output has `ceil(input / stride)`
    /// positions. When the total padding is odd, `SameSplit` decides which side gets
    /// the extra unit.
    Same,

    /// Only the head pad is supplied. The output extent is rounded up, and the tail pad
    /// is derived so that the last window still starts inside the padded image.
    LegacyPoolingCompat,
}

impl PaddingPolicy {
    /// Parses a policy from an operator argument.
    ///
    /// Accepts the textual names `NOTSET`, `VALID`, `SAME`, `CAFFE_LEGACY_POOLING`
    /// (case-insensitive) and the legacy integer codes 0 to 3 in the same order.
    ///
    /// # Errors
    ///
    /// - `ConvPoolError::ConfigurationError` - If the value names no known policy
    pub fn from_argument(value: &Argument) -> Result<Self, ConvPoolError> {
        match value {
            Argument::Int(code) => Self::from_code(*code),
            Argument::Str(name) => Self::from_name(name),
        }
    }

    /// Maps a legacy integer code to a policy.
    pub fn from_code(code: i64) -> Result<Self, ConvPoolError> {
        match code {
            0 => Ok(PaddingPolicy::Explicit),
            1 => Ok(PaddingPolicy::Valid),
            2 => Ok(PaddingPolicy::Same),
            3 => Ok(PaddingPolicy::LegacyPoolingCompat),
            _ => Err(ConvPoolError::ConfigurationError(format!(
                "unknown padding policy code {}",
                code
            ))),
        }
    }

    /// Maps a policy name to a policy.
    pub fn from_name(name: &str) -> Result<Self, ConvPoolError> {
        match name.to_ascii_uppercase().as_str() {
            "NOTSET" | "EXPLICIT" => Ok(PaddingPolicy::Explicit),
            "VALID" => Ok(PaddingPolicy::Valid),
            "SAME" => Ok(PaddingPolicy::Same),
            "CAFFE_LEGACY_POOLING" | "LEGACY_POOLING" => Ok(PaddingPolicy::LegacyPoolingCompat),
            _ => Err(ConvPoolError::ConfigurationError(format!(
                "unknown padding policy \"{}\"",
                name
            ))),
        }
    }

    /// Returns `true` for the policies that recompute pads from the input size on every call.
    pub fn recomputes_pads(self) -> bool {
        matches!(
            self,
            PaddingPolicy::Same | PaddingPolicy::LegacyPoolingCompat
        )
    }

    /// Returns `true` for the policies that forbid explicit pad arguments.
    pub fn forbids_explicit_pads(self) -> bool {
        matches!(self, PaddingPolicy::Valid | PaddingPolicy::Same)
    }
}

/// Decides which side receives the extra unit when `Same` padding needs an odd total.
///
/// The value is fixed when the operator is constructed and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSplit {
    /// The tail gets the extra unit (TensorFlow behavior).
    #[default]
    TailExtra,

    /// The head gets the extra unit (behavior closer to Caffe and cuDNN).
    HeadExtra,
}

/// Split convention used when none is given explicitly.
pub const DEFAULT_SAME_SPLIT: SameSplit = SameSplit::TailExtra;
