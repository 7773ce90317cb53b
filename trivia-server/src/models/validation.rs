//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent from the payload
    Missing { field: &'static str },

    /// Field could not be coerced to an integer
    NotNumeric { field: &'static str, value: String },

    /// Integer outside the representable or allowed range
    OutOfRange { field: &'static str, value: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::NotNumeric { field, value } => {
                write!(f, "{} must be an integer, got '{}'", field, value)
            }
            Self::OutOfRange { field, value } => {
                write!(f, "{} value {} is out of range", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::NotNumeric {
            field: "category",
            value: "science".into(),
        };
        assert_eq!(err.to_string(), "category must be an integer, got 'science'");

        let err = ValidationError::Missing { field: "answer" };
        assert_eq!(err.to_string(), "answer is required");
    }
}
