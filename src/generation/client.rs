//! HTTP client for the text-generation webhook.
//!
//! One POST per invocation, no retry. Retry policy, if ever wanted, belongs
//! to the orchestrator.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::recipe::config::GenerationConfig;
use crate::recipe::error::{RecipeError, RecipeResult};

/// Reply fields probed for the generated text, in order of preference.
const REPLY_TEXT_KEYS: &[&str] = &["result", "response", "text"];

/// Request body. The remote schema is unspecified, so the prompt travels
/// under every alias the service might expect.
#[derive(Serialize)]
struct GenerateRequest<'a> {
    message: &'a str,
    prompt: &'a str,
    text: &'a str,
    input: &'a str,
}

impl<'a> GenerateRequest<'a> {
    const fn new(prompt: &'a str) -> Self {
        Self {
            message: prompt,
            prompt,
            text: prompt,
            input: prompt,
        }
    }
}

/// Source of generated recipe text. The orchestrator depends on this seam;
/// tests substitute stubs for the real webhook.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Send the prompt and return the raw generated text.
    ///
    /// # Errors
    /// `Network` when the call cannot complete, `Transport` on a
    /// non-success status, `EmptyReply` when a successful response carries
    /// no usable text.
    async fn request_generation(&self, prompt: &str) -> RecipeResult<String>;
}

/// Webhook-backed [`GenerationBackend`].
pub struct GenerationClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl GenerationClient {
    /// Build a client with bounded timeouts from the generation settings.
    ///
    /// # Errors
    /// Returns an error if the endpoint URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &GenerationConfig) -> RecipeResult<Self> {
        let mut endpoint = Url::parse(&config.endpoint)?;
        if let Some(key) = &config.api_key {
            endpoint.query_pairs_mut().append_pair("key", key);
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| RecipeError::Config(e.to_string()))?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl GenerationBackend for GenerationClient {
    async fn request_generation(&self, prompt: &str) -> RecipeResult<String> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&GenerateRequest::new(prompt))
            .send()
            .await
            .map_err(|e| RecipeError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RecipeError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(RecipeError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(bytes = body.len(), "generation reply received");
        extract_reply_text(&body)
    }
}

/// Deterministically unwrap the generated text from a reply body.
///
/// A JSON object is probed for [`REPLY_TEXT_KEYS`] in order; a JSON string
/// is the text itself; a non-JSON body is taken verbatim.
fn extract_reply_text(body: &str) -> RecipeResult<String> {
    let text = match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => text,
        Ok(Value::Object(map)) => REPLY_TEXT_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .ok_or(RecipeError::EmptyReply)?,
        Ok(_) => return Err(RecipeError::EmptyReply),
        Err(_) => body.to_string(),
    };

    let text = text.trim();
    if text.is_empty() {
        Err(RecipeError::EmptyReply)
    } else {
        Ok(text.to_string())
    }
}
