//! Text generation providers.
//!
//! The flow only sees the [`TextGenerator`] capability. [`GeminiClient`] is
//! the hosted implementation; tests substitute their own.

mod error;
mod gemini;
mod traits;

pub use error::{GenerationError, FALLBACK_MESSAGE, NOT_CONFIGURED_MESSAGE};
pub use gemini::GeminiClient;
pub use traits::TextGenerator;

use std::sync::Arc;

use crate::config::Config;

/// Build the provider described by `config`.
///
/// A missing credential comes back as [`GenerationError::NotConfigured`];
/// the flow reports it on the first submission instead of failing startup.
pub fn from_config(config: &Config) -> Result<Arc<dyn TextGenerator>, GenerationError> {
    let client = GeminiClient::new(config.provider.clone(), &config.defaults)?;
    Ok(Arc::new(client))
}
