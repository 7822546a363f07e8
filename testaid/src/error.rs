//! Error types and result handling for test-data helpers.

use std::fmt;

/// Error raised by a helper when its input cannot be honored
#[derive(Debug, Clone, PartialEq)]
pub enum HelperError {
    /// The lower bound was not strictly below the upper bound
    InvalidRange { min: String, max: String },

    /// A floating-point bound pair spans more than the generator can draw from
    RangeTooWide { min: String, max: String, ceiling: f64 },

    /// A structurally invalid parameter
    InvalidArgument {
        parameter: &'static str,
        message: String,
    },

    /// A statistical operation received fewer values than it needs
    InsufficientData {
        operation: &'static str,
        required: usize,
        actual: usize,
    },

    /// A required argument was absent
    NullInput { parameter: &'static str },

    /// The target type cannot represent the source value
    Overflow {
        target: &'static str,
        value: String,
    },

    /// Text could not be parsed as the target type
    FormatError {
        target: &'static str,
        input: String,
    },

    /// The input has no conversion path to the target type
    InvalidCast {
        target: &'static str,
        source_type: String,
    },
}

/// Discriminant of a [`HelperError`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidRange,
    RangeTooWide,
    InvalidArgument,
    InsufficientData,
    NullInput,
    Overflow,
    FormatError,
    InvalidCast,
}

impl fmt::Display for HelperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelperError::InvalidRange { min, max } => {
                write!(f, "Invalid range: min {} must be less than max {}", min, max)
            }
            HelperError::RangeTooWide { min, max, ceiling } => {
                write!(
                    f,
                    "Range too wide: {} to {} exceeds the generator ceiling of {}",
                    min, max, ceiling
                )
            }
            HelperError::InvalidArgument { parameter, message } => {
                write!(f, "Invalid argument '{}': {}", parameter, message)
            }
            HelperError::InsufficientData {
                operation,
                required,
                actual,
            } => {
                write!(
                    f,
                    "Cannot determine the {} of a list of fewer than {} items (got {})",
                    operation, required, actual
                )
            }
            HelperError::NullInput { parameter } => {
                write!(f, "Required argument '{}' was absent", parameter)
            }
            HelperError::Overflow { target, value } => {
                write!(f, "Value {} was too large or too small for {}", value, target)
            }
            HelperError::FormatError { target, input } => {
                write!(f, "Input '{}' was not in a correct format for {}", input, target)
            }
            HelperError::InvalidCast {
                target,
                source_type,
            } => {
                write!(f, "Invalid cast from {} to {}", source_type, target)
            }
        }
    }
}

impl std::error::Error for HelperError {}

/// Result alias used throughout the crate
pub type HelperResult<T> = Result<T, HelperError>;

impl HelperError {
    /// The payload-free kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            HelperError::InvalidRange { .. } => ErrorKind::InvalidRange,
            HelperError::RangeTooWide { .. } => ErrorKind::RangeTooWide,
            HelperError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            HelperError::InsufficientData { .. } => ErrorKind::InsufficientData,
            HelperError::NullInput { .. } => ErrorKind::NullInput,
            HelperError::Overflow { .. } => ErrorKind::Overflow,
            HelperError::FormatError { .. } => ErrorKind::FormatError,
            HelperError::InvalidCast { .. } => ErrorKind::InvalidCast,
        }
    }

    /// Create an invalid range error from any displayable bounds
    pub fn invalid_range(min: impl fmt::Display, max: impl fmt::Display) -> Self {
        Self::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Create a range too wide error
    pub fn range_too_wide(min: impl fmt::Display, max: impl fmt::Display, ceiling: f64) -> Self {
        Self::RangeTooWide {
            min: min.to_string(),
            max: max.to_string(),
            ceiling,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            message: message.into(),
        }
    }

    /// Create an insufficient data error for statistics over fewer than `required` values
    pub fn insufficient_data(operation: &'static str, required: usize, actual: usize) -> Self {
        Self::InsufficientData {
            operation,
            required,
            actual,
        }
    }

    /// Create a null input error
    pub fn null_input(parameter: &'static str) -> Self {
        Self::NullInput { parameter }
    }

    /// Create an overflow error
    pub fn overflow(target: &'static str, value: impl fmt::Display) -> Self {
        Self::Overflow {
            target,
            value: value.to_string(),
        }
    }

    /// Create a format error
    pub fn format_error(target: &'static str, input: impl Into<String>) -> Self {
        Self::FormatError {
            target,
            input: input.into(),
        }
    }

    /// Create an invalid cast error
    pub fn invalid_cast(target: &'static str, source_type: impl Into<String>) -> Self {
        Self::InvalidCast {
            target,
            source_type: source_type.into(),
        }
    }
}

/// Return `error` if `predicate` holds for `parameter`.
///
/// Lets a test double fail on demand. An absent error with a true predicate
/// yields [`HelperError::NullInput`] converted into `E`.
pub fn fail_if<T, E>(
    error: Option<E>,
    predicate: impl FnOnce(&T) -> bool,
    parameter: &T,
) -> Result<(), E>
where
    E: From<HelperError>,
{
    if !predicate(parameter) {
        return Ok(());
    }

    match error {
        Some(error) => Err(error),
        None => Err(HelperError::null_input("error").into()),
    }
}
