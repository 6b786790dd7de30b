//! Error taxonomy shared by the gateway and the HTTP layer.
//!
//! `Validation` is the caller's fault and maps to 400. Every other variant is
//! an upstream failure and maps to 500 with the provider's payload under
//! `details`.

use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// A required request field is missing or malformed.
    #[error("{0}")]
    Validation(&'static str),

    /// The provider could not be reached or did not answer in time.
    #[error("translation provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("translation provider returned {status}")]
    Status { status: u16, body: Value },

    /// The provider reply did not have the expected shape.
    #[error("unexpected translation provider reply: {0}")]
    Malformed(String),
}

impl GatewayError {
    /// Diagnostic payload surfaced to clients under `details`.
    pub fn details(&self) -> Value {
        match self {
            GatewayError::Validation(msg) => json!(msg),
            GatewayError::Transport(e) if e.is_timeout() => {
                json!("translation provider request timed out")
            }
            GatewayError::Transport(e) => json!(e.to_string()),
            GatewayError::Status { body, .. } => body.clone(),
            GatewayError::Malformed(reason) => json!(reason),
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = GatewayError::Validation("Text is required");
        assert_eq!(err.to_string(), "Text is required");
        assert!(matches!(err, GatewayError::Validation(_)));
    }

    #[test]
    fn test_status_details_carry_provider_payload() {
        let payload = json!({"error": {"code": 401000, "message": "Access denied"}});
        let err = GatewayError::Status {
            status: 401,
            body: payload.clone(),
        };

        assert_eq!(err.details(), payload);
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_malformed_details() {
        let err = GatewayError::Malformed("missing translations".to_string());
        assert_eq!(err.details(), json!("missing translations"));
    }
}
