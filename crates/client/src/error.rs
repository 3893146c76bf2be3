//! Error taxonomy for the content API client.

use thiserror::Error;

/// Errors that can occur when talking to the content API.
///
/// Partial failure inside a multi-file upload batch is deliberately *not* an
/// error variant; it is reported through
/// [`UploadReport`](crate::upload::UploadReport).
#[derive(Debug, Error)]
pub enum ApiError {
    /// An admin-scoped operation was invoked without a configured token.
    /// Raised before any network call is attempted.
    #[error("authentication required: no admin token configured")]
    AuthenticationRequired,

    /// The server answered with a non-2xx status. The message is extracted
    /// from the response envelope's `message` field when present, otherwise
    /// the HTTP status text.
    #[error("server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The requested entity does not exist (HTTP 404). Never retried.
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport-level failure after the retry budget was exhausted.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response whose body is not JSON at all. A body that is valid
    /// JSON but missing the expected envelope fields is treated as empty
    /// data, not as this error.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Whether a failed GET with this error may be retried.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 422,
            message: "slug already exists".to_string(),
        };
        assert_eq!(err.to_string(), "server error (422): slug already exists");
    }

    #[test]
    fn test_retryable_classification() {
        assert!(
            ApiError::Status {
                status: 503,
                message: String::new()
            }
            .is_retryable()
        );
        assert!(
            !ApiError::Status {
                status: 422,
                message: String::new()
            }
            .is_retryable()
        );
        assert!(!ApiError::NotFound("x".to_string()).is_retryable());
        assert!(!ApiError::AuthenticationRequired.is_retryable());
    }
}
