//! Credential resolution from configuration.
//!
//! This module provides secure handling of the provider API key
//! resolved from the config or the environment at runtime.

use super::types::ProviderConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution for the provider.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl ProviderConfig {
    /// Resolve the API key, preferring the config value over the environment.
    ///
    /// Called on demand and not cached, so a key exported after startup is
    /// picked up the next time a client is built.
    pub fn resolve_credential(&self) -> CredentialStatus {
        self.resolve_credential_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key using `lookup` in place of the process environment.
    pub fn resolve_credential_with<F>(&self, lookup: F) -> CredentialStatus
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ref key) = self.api_key {
            if !key.trim().is_empty() {
                return CredentialStatus::Configured(SecureString::new(key.trim().to_string()));
            }
        }

        if self.api_key_env.is_empty() {
            return CredentialStatus::Unconfigured {
                reason: "api_key is not set".to_string(),
            };
        }

        match lookup(&self.api_key_env) {
            Some(key) if !key.trim().is_empty() => {
                CredentialStatus::Configured(SecureString::new(key.trim().to_string()))
            }
            _ => CredentialStatus::Unconfigured {
                reason: format!("api_key is not set and ${} is empty", self.api_key_env),
            },
        }
    }

    /// Check if the provider has a usable credential.
    pub fn is_configured(&self) -> bool {
        matches!(self.resolve_credential(), CredentialStatus::Configured(_))
    }
}
