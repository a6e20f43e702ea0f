//! Error types for structured extraction.

use thiserror::Error;

/// Errors that can occur while asking the model for structured fields.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// No API key was configured.
    #[error("no API key configured (set OPENAI_API_KEY)")]
    MissingApiKey,

    /// The HTTP client could not be built or the request did not complete.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered 429.
    #[error("rate limited by the extraction API")]
    RateLimited,

    /// The API answered with a non-success status.
    #[error("extraction API returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, or a placeholder when it could not be read.
        message: String,
    },

    /// The completion carried no message content.
    #[error("extraction response has no content")]
    EmptyResponse,

    /// The message content was not a JSON object.
    #[error("extraction response is not a JSON object: {0}")]
    InvalidJson(String),
}

impl ExtractError {
    /// Whether sending the same request again may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::RateLimited => true,
            Self::Api { status, .. } => *status >= 500,
            Self::MissingApiKey | Self::EmptyResponse | Self::InvalidJson(_) => false,
        }
    }
}

impl From<reqwest::Error> for ExtractError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable() {
        assert!(ExtractError::Network("timeout".to_string()).is_retryable());
        assert!(ExtractError::RateLimited.is_retryable());
        assert!(
            ExtractError::Api {
                status: 503,
                message: String::new()
            }
            .is_retryable()
        );
        assert!(
            !ExtractError::Api {
                status: 401,
                message: String::new()
            }
            .is_retryable()
        );
        assert!(!ExtractError::InvalidJson("x".to_string()).is_retryable());
    }
}
