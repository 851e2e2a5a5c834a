//! Configuration for the recipe-generation service.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::parser::ParserConfig;

/// Environment variable for the generation webhook URL.
pub const WEBHOOK_URL_ENV: &str = "RECETAS_WEBHOOK_URL";
/// Environment variable for the webhook API key.
pub const WEBHOOK_KEY_ENV: &str = "RECETAS_WEBHOOK_KEY";
/// Environment variable for the optional lead webhook URL.
pub const LEAD_WEBHOOK_ENV: &str = "RECETAS_LEAD_WEBHOOK_URL";
/// Environment variable for the failure policy (`fallback` or `surface`).
pub const FAILURE_POLICY_ENV: &str = "RECETAS_FAILURE_POLICY";

/// Default generation endpoint, overridable via [`WEBHOOK_URL_ENV`].
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8787/generate";

/// What the orchestrator does when the remote pipeline fails.
///
/// One mode is chosen per deployment; the two behaviors never mix inside a
/// single call path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Substitute a locally synthesized recipe and log the failure.
    #[default]
    Fallback,
    /// Fail the operation with a user-displayable message.
    Surface,
}

/// Settings for the HTTP call to the generation webhook.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Webhook endpoint URL.
    pub endpoint: String,
    /// Optional API key, sent as a query parameter.
    pub api_key: Option<String>,
    /// Request timeout.
    #[serde(with = "duration_serde")]
    pub request_timeout: Duration,
    /// Connection timeout.
    #[serde(with = "duration_serde")]
    pub connect_timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            request_timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Configuration for the whole recipe service.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecipeConfig {
    /// Generation webhook settings.
    pub generation: GenerationConfig,
    /// Failure handling mode for this deployment.
    pub failure_policy: FailurePolicy,
    /// Optional CRM/logging webhook notified after each generation.
    pub lead_webhook_url: Option<String>,
    /// Keyword table for the response parser.
    pub parser: ParserConfig,
}

impl RecipeConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from `RECETAS_*` environment variables, falling back
    /// to defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(endpoint) = std::env::var(WEBHOOK_URL_ENV) {
            config.generation.endpoint = endpoint;
        }
        if let Ok(key) = std::env::var(WEBHOOK_KEY_ENV) {
            config.generation.api_key = Some(key);
        }
        if let Ok(url) = std::env::var(LEAD_WEBHOOK_ENV) {
            config.lead_webhook_url = Some(url);
        }
        if let Ok(policy) = std::env::var(FAILURE_POLICY_ENV) {
            if policy.eq_ignore_ascii_case("surface") {
                config.failure_policy = FailurePolicy::Surface;
            }
        }
        config
    }

    /// Set the generation endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.generation.endpoint = endpoint.into();
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.generation.api_key = Some(key.into());
        self
    }

    /// Set the failure policy.
    #[must_use]
    pub const fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Set the lead webhook URL.
    #[must_use]
    pub fn with_lead_webhook(mut self, url: impl Into<String>) -> Self {
        self.lead_webhook_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.generation.request_timeout = timeout;
        self
    }
}

/// Serde module for Duration serialization.
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RecipeConfig::default();
        assert_eq!(config.failure_policy, FailurePolicy::Fallback);
        assert!(config.lead_webhook_url.is_none());
        assert!(config.generation.api_key.is_none());
        assert_eq!(config.generation.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn config_builder() {
        let config = RecipeConfig::new()
            .with_endpoint("https://example.com/hook")
            .with_api_key("test-key")
            .with_failure_policy(FailurePolicy::Surface)
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.generation.endpoint, "https://example.com/hook");
        assert_eq!(config.generation.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.failure_policy, FailurePolicy::Surface);
        assert_eq!(config.generation.request_timeout, Duration::from_secs(30));
    }
}
