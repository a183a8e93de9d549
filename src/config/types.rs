use serde::{Deserialize, Serialize};

/// Instruction wrapped around the user's description before it is sent to
/// the generation provider. `{description}` is replaced with the trimmed input.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "Generate a sincere and professional apology letter/email (between 100-300 words) based on this context: {description}. The apology should be genuine, take responsibility, and offer a solution or way forward. Make it personal and empathetic, avoiding generic corporate language.";

/// Placeholder the prompt template must contain.
pub const DESCRIPTION_PLACEHOLDER: &str = "{description}";

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub flow: FlowConfig,
}

/// Transport settings shared by outbound requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Generation provider configuration (Gemini REST API).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL for the API (e.g., "https://generativelanguage.googleapis.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used for `generateContent` calls.
    #[serde(default = "default_model")]
    pub model: String,
    /// Direct API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is unset.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Upper bound on generated tokens.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

/// Policy constants of the apology request flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Instruction template; must contain `{description}`.
    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,
    /// How long the "copied" acknowledgement stays visible, in milliseconds.
    #[serde(default = "default_copy_ack_ms")]
    pub copy_ack_ms: u64,
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_max_output_tokens() -> u32 {
    1024
}

fn default_prompt_template() -> String {
    DEFAULT_PROMPT_TEMPLATE.to_string()
}

fn default_copy_ack_ms() -> u64 {
    2000
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            api_key_env: default_api_key_env(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            prompt_template: default_prompt_template(),
            copy_ack_ms: default_copy_ack_ms(),
        }
    }
}
