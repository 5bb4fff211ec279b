use crate::error::ConvPoolError;
use ahash::AHashMap;

/// A single operator argument value as delivered by the operator definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Int(i64),
    Str(String),
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Argument::Int(value)
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Self {
        Argument::Int(i64::from(value))
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::Str(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Str(value)
    }
}

/// Named arguments attached to an operator definition.
///
/// This is the boundary to whatever framework parses operator definitions: it only
/// answers whether an argument was supplied and what its single value is.
///
/// # Examples
/// ```rust
/// use convpool::argument::OperatorArgs;
///
/// let args = OperatorArgs::new()
///     .with("kernel", 3)
///     .with("stride", 2)
///     .with("order", "NHWC");
///
/// assert!(args.has_argument("kernel"));
/// assert!(!args.has_argument("pad"));
/// assert_eq!(args.get_int("stride", 1).unwrap(), 2);
/// assert_eq!(args.get_int("pad", 0).unwrap(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OperatorArgs {
    values: AHashMap<String, Argument>,
}

impl OperatorArgs {
    /// Creates an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) an argument, returning the updated set.
    pub fn with(mut self, name: &str, value: impl Into<Argument>) -> Self {
        self.set(name, value);
        self
    }

    /// Adds (or replaces) an argument in place.
    pub fn set(&mut self, name: &str, value: impl Into<Argument>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Returns `true` if the argument was explicitly supplied.
    pub fn has_argument(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the raw argument if supplied.
    pub fn get(&self, name: &str) -> Option<&Argument> {
        self.values.get(name)
    }

    /// Reads an integer argument, falling back to `default` when it is absent.
    ///
    /// # Errors
    ///
    /// - `ConvPoolError::ConfigurationError` - If the argument exists but is not an integer
    pub fn get_int(&self, name: &str, default: i64) -> Result<i64, ConvPoolError> {
        match self.values.get(name) {
            None => Ok(default),
            Some(Argument::Int(value)) => Ok(*value),
            Some(Argument::Str(value)) => Err(ConvPoolError::ConfigurationError(format!(
                "argument `{}` must be an integer, got string \"{}\"",
                name, value
            ))),
        }
    }

    /// Reads a string argument, falling back to `default` when it is absent.
    ///
    /// # Errors
    ///
    /// - `ConvPoolError::ConfigurationError` - If the argument exists but is not a string
    pub fn get_str<'a>(&'a self, name: &str, default: &'a str) -> Result<&'a str, ConvPoolError> {
        match self.values.get(name) {
            None => Ok(default),
            Some(Argument::Str(value)) => Ok(value.as_str()),
            Some(Argument::Int(value)) => Err(ConvPoolError::ConfigurationError(format!(
                "argument `{}` must be a string, got integer {}",
                name, value
            ))),
        }
    }
}
