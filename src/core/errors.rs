//! Custom error types for translation operations

use thiserror::Error;

use crate::core::models::RemoteError;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Connection-level failure (DNS, TCP, TLS, body read)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not valid JSON or lacks the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Non-2xx status whose body could not be decoded as an envelope
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Raw body, lossily decoded
        body: String,
    },

    /// The service answered with an error envelope.
    ///
    /// Displays exactly as `"<code>: <message>"`.
    #[error("{0}")]
    Remote(RemoteError),

    /// Success envelope without any translation
    #[error("Invalid response: no translations returned")]
    EmptyTranslations,

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What was wrong
        message: String,
    },
}

impl TranslationError {
    /// Remote error payload, if this failure came from an error envelope
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            TranslationError::Remote(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RemoteError> for TranslationError {
    fn from(err: RemoteError) -> Self {
        TranslationError::Remote(err)
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display() {
        let err = TranslationError::from(RemoteError {
            code: 123,
            message: "bad".to_string(),
        });

        assert_eq!(err.to_string(), "123: bad");
        assert_eq!(err.remote().map(|e| e.code), Some(123));
    }

    #[test]
    fn test_parse_error_has_no_remote() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = TranslationError::from(json_err);

        assert!(err.remote().is_none());
        assert!(err.to_string().starts_with("Parse error"));
    }
}
