//! Error types for the Kolegium content API
//!
//! Three failure classes cross the layer boundary: validation faults (client
//! input, every violation reported), storage unavailable (no connection was
//! established at startup), and storage faults (the underlying cause is
//! carried as opaque detail). None of them are fatal to the process.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Convenience result alias
pub type Result<T> = std::result::Result<T, ApiError>;

/// A single violated field constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Field name as it appears in the request body
    pub field: String,
    /// What the field must satisfy
    pub message: String,
}

/// Validation failure carrying every violated field of a payload
///
/// Violations are collected across the whole body before failing, so the
/// caller sees all problems in one response rather than one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// A validation error with a single violation
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        Self {
            violations: vec![Violation {
                field: field.to_string(),
                message: message.into(),
            }],
        }
    }

    /// Whether a given field is among the violations
    pub fn cites(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Top-level error taxonomy
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-input fault, all violations enumerated
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No database connection was established at startup
    #[error("storage unavailable: no database connection established")]
    StorageUnavailable,

    /// Persistence fault, underlying cause attached as detail
    #[error("storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_violation() {
        let err = ValidationError {
            violations: vec![
                Violation {
                    field: "title".into(),
                    message: "required field is missing".into(),
                },
                Violation {
                    field: "year".into(),
                    message: "must be an integer between 1900 and 2100".into(),
                },
            ],
        };
        let text = err.to_string();
        assert!(text.contains("title: required field is missing"));
        assert!(text.contains("year: must be an integer between 1900 and 2100"));
    }

    #[test]
    fn cites_matches_violated_fields_only() {
        let err = ValidationError::single("email", "must be a well-formed email address");
        assert!(err.cites("email"));
        assert!(!err.cites("name"));
    }
}
