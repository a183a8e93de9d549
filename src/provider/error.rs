//! Error types for text generation.

use thiserror::Error;

/// Message shown when no provider credential is configured.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "API key not configured. Please add your Gemini API key to continue.";

/// Message shown when a failure carries no usable detail.
pub const FALLBACK_MESSAGE: &str = "An error occurred while generating the apology";

/// Errors that can occur while generating text.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No credential is available, detected before any network attempt.
    #[error("{}", NOT_CONFIGURED_MESSAGE)]
    NotConfigured,

    /// The HTTP client could not be set up (TLS backend, system resolver).
    #[error("Failed to initialize the generation client: {0}")]
    ClientSetup(String),

    /// Network-level failure (connect, timeout, TLS).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Provider refused the prompt.
    #[error("The request was blocked by the provider ({reason})")]
    Blocked { reason: String },

    /// Response decoded but carried no text.
    #[error("The provider returned an empty response")]
    EmptyResponse,

    /// Free-form failure reported by a provider implementation.
    /// An empty string means no detail is available.
    #[error("{0}")]
    Provider(String),

    /// The in-flight task was aborted before it settled.
    #[error("Generation was cancelled")]
    Cancelled,
}

impl GenerationError {
    /// Failure with an optional descriptive message.
    pub fn provider(message: Option<impl Into<String>>) -> Self {
        Self::Provider(message.map(Into::into).unwrap_or_default())
    }

    /// Text to display to the user: the failure's own message, or the
    /// generic fallback when it carries none.
    pub fn user_message(&self) -> String {
        let detail = self.to_string();
        if detail.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            detail
        }
    }

    /// Whether this is the missing-credential failure.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_uses_fixed_message() {
        assert_eq!(
            GenerationError::NotConfigured.user_message(),
            NOT_CONFIGURED_MESSAGE
        );
        assert!(GenerationError::NotConfigured.is_configuration());
    }

    #[test]
    fn provider_message_is_passed_through() {
        let err = GenerationError::provider(Some("network timeout"));
        assert_eq!(err.user_message(), "network timeout");
        assert!(!err.is_configuration());
    }

    #[test]
    fn missing_detail_falls_back_to_generic_message() {
        assert_eq!(
            GenerationError::provider(None::<String>).user_message(),
            FALLBACK_MESSAGE
        );
        assert_eq!(
            GenerationError::provider(Some("   ")).user_message(),
            FALLBACK_MESSAGE
        );
        assert_eq!(
            GenerationError::Api {
                status: 500,
                message: String::new(),
            }
            .user_message(),
            FALLBACK_MESSAGE
        );
    }

    #[test]
    fn api_error_shows_provider_message() {
        let err = GenerationError::Api {
            status: 400,
            message: "API key not valid".into(),
        };
        assert_eq!(err.user_message(), "API key not valid");
    }
}
