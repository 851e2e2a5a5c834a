//! Recipe generation pipeline.
//!
//! Flow: form submission → prompt → generation webhook → parsed record,
//! with a deterministic local fallback when the remote pipeline fails.

pub mod config;
pub mod error;
pub mod fallback;
pub mod form;
pub mod parser;
pub mod prompt;
pub mod record;

pub use config::{FailurePolicy, RecipeConfig};
pub use error::{RecipeError, RecipeResult, ValidationError};
pub use form::FormSubmission;
pub use parser::ResponseParser;
pub use record::RecipeRecord;

use crate::generation::{GenerationBackend, GenerationClient, LeadNotifier};

/// Orchestrator for recipe generation.
///
/// One `generate` call per submission; calls are independent, with no
/// caching, dedup, or retry. The configured [`FailurePolicy`] is the single
/// point deciding between substituting a fallback recipe and surfacing an
/// error.
pub struct RecipeService {
    failure_policy: FailurePolicy,
    backend: Box<dyn GenerationBackend>,
    parser: ResponseParser,
    notifier: Option<LeadNotifier>,
}

impl RecipeService {
    /// Create a service with the given configuration.
    ///
    /// # Errors
    /// Returns an error if the webhook endpoints are invalid or the parser
    /// patterns fail to compile.
    pub fn new(config: RecipeConfig) -> RecipeResult<Self> {
        let backend = GenerationClient::new(&config.generation)?;
        Self::with_backend(config, Box::new(backend))
    }

    /// Create a service with default configuration.
    ///
    /// # Errors
    /// Returns an error if construction fails.
    pub fn with_defaults() -> RecipeResult<Self> {
        Self::new(RecipeConfig::default())
    }

    /// Create a service around an explicit generation backend.
    ///
    /// # Errors
    /// Returns an error if the lead webhook URL is invalid or the parser
    /// patterns fail to compile.
    pub fn with_backend(
        config: RecipeConfig,
        backend: Box<dyn GenerationBackend>,
    ) -> RecipeResult<Self> {
        let parser = ResponseParser::new(config.parser)?;
        let notifier = match &config.lead_webhook_url {
            Some(url) => Some(LeadNotifier::new(url)?),
            None => None,
        };

        Ok(Self {
            failure_policy: config.failure_policy,
            backend,
            parser,
            notifier,
        })
    }

    /// Generate a recipe for a validated submission.
    ///
    /// # Errors
    /// Under `FailurePolicy::Surface`, a remote failure yields
    /// [`RecipeError::Generation`] carrying a user-displayable message.
    /// Under `FailurePolicy::Fallback` this operation always succeeds.
    pub async fn generate(&self, submission: &FormSubmission) -> RecipeResult<RecipeRecord> {
        let prompt = prompt::build_prompt(submission);
        tracing::debug!(category = submission.category().as_str(), "requesting recipe");

        match self.backend.request_generation(&prompt).await {
            Ok(reply) => {
                if let Some(notifier) = &self.notifier {
                    notifier.notify(submission, &reply);
                }
                Ok(self.parser.parse(&reply))
            }
            Err(err) => match self.failure_policy {
                FailurePolicy::Fallback => {
                    tracing::warn!("generation failed, substituting fallback recipe: {err}");
                    Ok(fallback::fallback_recipe(submission))
                }
                FailurePolicy::Surface => {
                    tracing::warn!("generation failed, surfacing error: {err}");
                    Err(RecipeError::Generation(err.user_message().to_string()))
                }
            },
        }
    }
}
