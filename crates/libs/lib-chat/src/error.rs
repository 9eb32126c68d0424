//! # Chat Errors
//!
//! Errors raised below the relay boundary. The relay absorbs every
//! [`ProviderError`] and turns it into a scripted reply, so none of these ever
//! reaches the widget.

use thiserror::Error;

/// Failure talking to the hosted conversational-AI provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No API key was available when the session was created
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// The request never produced a response (DNS, TLS, connection reset, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status
    #[error("Provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::Malformed(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Malformed(err.to_string())
    }
}

/// Invalid relay configuration value
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a number, got {value:?}")]
    NotANumber { key: &'static str, value: String },

    #[error("{key} must be between {min} and {max}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ProviderError::Status {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "Provider returned HTTP 503: overloaded");
    }

    #[test]
    fn test_json_error_is_malformed() {
        let err: ProviderError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }
}
