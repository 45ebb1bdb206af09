//! Validation error types

use std::fmt;

/// Validation error for lodging input
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required fields absent from the request body
    MissingFields { fields: Vec<&'static str> },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Numeric field must be a positive number
    NotPositive { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { fields } => write!(
                f,
                "request needs a JSON body with a name, a price, and an owner ID (missing: {})",
                fields.join(", ")
            ),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::NotPositive { field } => {
                write!(f, "{} must be a positive number", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
