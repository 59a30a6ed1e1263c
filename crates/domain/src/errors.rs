//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Verdant client operations
///
/// Variants follow the HTTP boundary: transport failures stay `Network`,
/// 401/403 become `Auth`, other 4xx become `Validation` carrying the
/// server-provided message, 5xx become `Server`. Nothing is retried and no
/// message is rewritten beyond unwrapping the HTTP envelope.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum VerdantError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Verdant operations
pub type Result<T> = std::result::Result<T, VerdantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_and_message() {
        let err = VerdantError::Auth("token rejected".to_string());
        assert_eq!(err.to_string(), "Authentication error: token rejected");

        let err = VerdantError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn serializes_with_type_tag() {
        let err = VerdantError::Validation("name is required".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "Validation");
        assert_eq!(json["message"], "name is required");
    }
}
