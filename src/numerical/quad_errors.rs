use std::fmt;
use std::io;

/// Violations of the interval invariants and of the partition count contract
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// left bound is below 0
    NegativeLeftBound(f64),
    /// the bound checked against pi exceeds it (the check is applied to the left bound)
    RightBoundTooLarge(f64),
    /// left >= right
    DegenerateOrReversed { left: f64, right: f64 },
    /// partition count of 0 was requested
    ZeroPartitions,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::NegativeLeftBound(_) => {
                write!(f, "Interval's left bound must be greater than or equal to 0")
            }
            ValidationError::RightBoundTooLarge(_) => {
                write!(f, "Interval's right bound must be less than or equal to pi")
            }
            ValidationError::DegenerateOrReversed { .. } => {
                write!(f, "Interval's right bound must be greater than the left one")
            }
            ValidationError::ZeroPartitions => write!(f, "Partition count must be positive"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every way a quadrature session can fail. All of them are terminal.
#[derive(Debug)]
pub enum QuadError {
    /// scalar could not be read or parsed; carries the prompt label
    InputError { label: String, reason: String },
    ValidationError(ValidationError),
    /// result of experiment #index could not be rendered as text
    FormattingError { index: usize },
    /// writing to the output stream failed
    IOError(io::Error),
    /// experiment #index failed, wraps the underlying cause
    ExperimentError { index: usize, source: Box<QuadError> },
}

impl fmt::Display for QuadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuadError::InputError { label, reason } => {
                write!(f, "Unable to read {} ({})", label, reason)
            }
            QuadError::ValidationError(error) => write!(f, "{}", error),
            QuadError::FormattingError { index } => {
                write!(f, "Unable to write result of experiment #{} to string", index)
            }
            QuadError::IOError(error) => write!(f, "Unable to write to stdout: {}", error),
            QuadError::ExperimentError { index, source } => {
                write!(f, "Error occurred in experiment #{}: {}", index, source)
            }
        }
    }
}

impl std::error::Error for QuadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuadError::ValidationError(error) => Some(error),
            QuadError::IOError(error) => Some(error),
            QuadError::ExperimentError { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<ValidationError> for QuadError {
    fn from(error: ValidationError) -> Self {
        QuadError::ValidationError(error)
    }
}

impl From<io::Error> for QuadError {
    fn from(error: io::Error) -> Self {
        QuadError::IOError(error)
    }
}
