// File: src/error.rs
// Purpose: Validation and submission error types

use crate::values::FieldName;
use thiserror::Error;

/// A field value violates one of its schema rules
///
/// Only ever shown as a per-field message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: FieldName,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Sending an order failed
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The endpoint answered with a non-success status
    #[error("order rejected ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The HTTP request itself failed (network, DNS, TLS, timeout)
    #[error("order request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with success but the body could not be read
    #[error("invalid order response: {0}")]
    InvalidResponse(String),
}

impl SubmissionError {
    /// Message reported by the order endpoint, if it gave one
    pub fn reported_message(&self) -> Option<&str> {
        match self {
            SubmissionError::Rejected { message, .. } => {
                message.as_deref().filter(|message| !message.is_empty())
            }
            SubmissionError::Request(_) | SubmissionError::InvalidResponse(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_message() {
        let rejected = SubmissionError::Rejected {
            status: 422,
            message: Some("size must be S or M or L".to_string()),
        };
        assert_eq!(rejected.reported_message(), Some("size must be S or M or L"));

        let silent = SubmissionError::Rejected {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(silent.reported_message(), None);

        let invalid = SubmissionError::InvalidResponse("expected value".to_string());
        assert_eq!(invalid.reported_message(), None);
    }

    #[test]
    fn test_validation_error_displays_message() {
        let err = ValidationError::new(FieldName::Size, "size must be S or M or L");
        assert_eq!(err.to_string(), "size must be S or M or L");
    }
}
