/// Store error taxonomy
///
/// This module provides the unified error type for every event-store
/// operation. The variants keep the failure classes the views care about
/// distinct: a permission denial is surfaced as a blocking message with no
/// retry, a validation failure blocks submission, and network or backend
/// failures abandon the operation for the user to re-trigger manually.
///
/// Nothing in this taxonomy is fatal to the process.
///
/// # Example
///
/// ```
/// use eventhub_core::error::StoreError;
///
/// let err = StoreError::PermissionDenied("profiles are admin-only".to_string());
/// assert!(err.is_permission_denied());
/// assert_eq!(err.kind(), "permission_denied");
/// ```

use serde::{Deserialize, Serialize};

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// One field that failed client-side validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Field that failed validation
    pub field: String,

    /// Error message
    pub message: String,
}

/// Unified error type for event-store operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// Client-side validation failed; the request was never dispatched
    #[error("validation failed: {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// The requested row does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// The backend's row-level security rejected the operation
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Transport-level failure; the operation may or may not have reached
    /// the backend
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a row this client cannot decode
    #[error("malformed backend response: {0}")]
    Decode(String),

    /// Any other backend rejection
    #[error("backend error ({status}): {message}")]
    Backend {
        /// HTTP status code
        status: u16,

        /// Message from the backend, best effort
        message: String,
    },
}

impl StoreError {
    /// Stable error code for logging and display routing
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Validation(_) => "validation",
            StoreError::NotFound(_) => "not_found",
            StoreError::PermissionDenied(_) => "permission_denied",
            StoreError::Network(_) => "network",
            StoreError::Decode(_) => "decode",
            StoreError::Backend { .. } => "backend",
        }
    }

    /// Checks for a server-enforced denial, which views surface as a
    /// blocking message and never retry
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, StoreError::PermissionDenied(_))
    }
}

impl From<validator::ValidationErrors> for StoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let violations = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldViolation {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();

        StoreError::Validation(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Form {
        #[validate(length(min = 1, message = "title must not be empty"))]
        title: String,
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound("event b1d27e55".to_string());
        assert_eq!(err.to_string(), "not found: event b1d27e55");

        let err = StoreError::Backend {
            status: 500,
            message: "internal".to_string(),
        };
        assert_eq!(err.to_string(), "backend error (500): internal");
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        assert_eq!(StoreError::Network("x".into()).kind(), "network");
        assert_eq!(StoreError::Decode("x".into()).kind(), "decode");
        assert_eq!(
            StoreError::PermissionDenied("x".into()).kind(),
            "permission_denied"
        );
        assert_ne!(
            StoreError::PermissionDenied("x".into()).kind(),
            StoreError::Validation(vec![]).kind()
        );
    }

    #[test]
    fn test_permission_denied_check() {
        assert!(StoreError::PermissionDenied("rls".into()).is_permission_denied());
        assert!(!StoreError::Network("down".into()).is_permission_denied());
    }

    #[test]
    fn test_from_validation_errors() {
        let form = Form {
            title: String::new(),
        };
        let err: StoreError = form.validate().unwrap_err().into();

        match err {
            StoreError::Validation(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "title");
                assert_eq!(violations[0].message, "title must not be empty");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
