//! Core trait for text generation providers.

use async_trait::async_trait;

use super::error::GenerationError;

/// A hosted model that turns a prompt into text.
///
/// The flow calls `generate` exactly once per accepted submission and never
/// retries. Implementations own their transport timeouts.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the name of this provider for logging.
    fn name(&self) -> &'static str;

    /// Model identifier shown in the UI.
    fn model(&self) -> &str {
        ""
    }

    /// Whether a credential is available.
    ///
    /// Checked by the flow before any network attempt. Default is true.
    fn is_configured(&self) -> bool {
        true
    }

    /// Request a single text completion for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
