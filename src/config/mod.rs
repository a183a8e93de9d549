//! Configuration: TOML file, defaults and credential resolution.

mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{
    Config, Defaults, FlowConfig, ProviderConfig, DEFAULT_PROMPT_TEMPLATE,
    DESCRIPTION_PLACEHOLDER,
};
