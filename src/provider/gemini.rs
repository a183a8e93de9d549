//! Client for the Gemini `generateContent` REST endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::config::{CredentialStatus, Defaults, ProviderConfig, SecureString};

use super::error::GenerationError;
use super::traits::TextGenerator;

/// Client for calling the Gemini API.
pub struct GeminiClient {
    client: Client,
    config: ProviderConfig,
    api_key: SecureString,
}

impl GeminiClient {
    /// Create a new GeminiClient from config.
    ///
    /// Fails with [`GenerationError::NotConfigured`] if no API key is available
    /// (neither in config nor env var), and with
    /// [`GenerationError::ClientSetup`] if the HTTP client cannot be built.
    pub fn new(config: ProviderConfig, defaults: &Defaults) -> Result<Self, GenerationError> {
        let api_key = match config.resolve_credential() {
            CredentialStatus::Configured(key) => key,
            CredentialStatus::Unconfigured { reason } => {
                tracing::warn!(reason = %reason, "Gemini API key not configured");
                return Err(GenerationError::NotConfigured);
            }
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(defaults.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(
                defaults.connect_timeout_seconds,
            )))
            .build()
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to build HTTP client");
                GenerationError::ClientSetup(e.to_string())
            })?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Full URL of the `generateContent` call for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_request<'a>(&self, prompt: &'a str) -> ApiRequest<'a> {
        ApiRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![OutgoingPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.config.max_output_tokens,
            },
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn is_configured(&self) -> bool {
        !self.api_key.expose().is_empty()
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if !self.is_configured() {
            return Err(GenerationError::NotConfigured);
        }

        let url = self.endpoint();
        let request_body = self.build_request(prompt);

        tracing::debug!(
            url = %url,
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending generation request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", self.api_key.expose())
            .json(&request_body)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            tracing::error!(
                status = %status,
                latency_ms,
                error = %error_text,
                "Gemini API error"
            );

            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: api_error_message(&error_text),
            });
        }

        let response_text = response.text().await?;
        let response_body: ApiResponse = serde_json::from_str(&response_text).map_err(|e| {
            GenerationError::Parse(format!("Failed to parse response JSON: {}", e))
        })?;

        let text = extract_text(response_body)?;

        tracing::debug!(latency_ms, text_len = text.len(), "Generation succeeded");

        Ok(text)
    }
}

/// Pull the message out of a Gemini error body, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if !parsed.error.message.trim().is_empty() => parsed.error.message,
        _ => body.trim().to_string(),
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: ApiResponse) -> Result<String, GenerationError> {
    let block_reason = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason);

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(match block_reason {
            Some(reason) => GenerationError::Blocked { reason },
            None => GenerationError::EmptyResponse,
        });
    };

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if !text.is_empty() {
        return Ok(text);
    }

    match candidate.finish_reason.as_deref() {
        Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) => {
            Err(GenerationError::Blocked {
                reason: reason.to_string(),
            })
        }
        _ => Err(GenerationError::EmptyResponse),
    }
}

/// `generateContent` request format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<OutgoingPart<'a>>,
}

#[derive(Debug, Serialize)]
struct OutgoingPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

/// `generateContent` response format.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<IncomingPart>,
}

#[derive(Debug, Deserialize)]
struct IncomingPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}
