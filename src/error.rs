//! Error types for Farmgate
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Farmgate operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, session management, and calls against the
/// remote marketplace API.
#[derive(Error, Debug)]
pub enum FarmgateError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-2xx response from the marketplace API
    ///
    /// `message` is the server-provided `message` field when the error
    /// body carried one, otherwise the fixed fallback string.
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the server
        status: u16,
        /// User-facing message for the failure
        message: String,
    },

    /// No session is stored; the command requires a prior login
    #[error("You are not logged in. Run `farmgate login` first.")]
    NotLoggedIn,

    /// Authentication errors (rejected credentials, bad token)
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Input validation errors (empty fields, bad dates)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Keyring/session storage errors
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

/// Result type alias for Farmgate operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = FarmgateError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_api_error_display_uses_message_only() {
        let error = FarmgateError::Api {
            status: 400,
            message: "Invalid promo code.".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid promo code.");
    }

    #[test]
    fn test_not_logged_in_display_names_the_login_command() {
        let error = FarmgateError::NotLoggedIn;
        assert!(error.to_string().contains("farmgate login"));
    }

    #[test]
    fn test_authentication_error_display() {
        let error = FarmgateError::Authentication("token rejected".to_string());
        assert_eq!(error.to_string(), "Authentication error: token rejected");
    }

    #[test]
    fn test_invalid_input_display() {
        let error = FarmgateError::InvalidInput("price must be positive".to_string());
        assert_eq!(error.to_string(), "Invalid input: price must be positive");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let error: FarmgateError = json_error.into();
        assert!(matches!(error, FarmgateError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("invalid: : yaml").unwrap_err();
        let error: FarmgateError = yaml_error.into();
        assert!(matches!(error, FarmgateError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FarmgateError>();
    }
}
