//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::recipe::{RecipeConfig, RecipeService};

/// Shared application state.
pub struct AppState {
    /// Recipe generation service.
    pub service: RecipeService,
}

impl AppState {
    /// Create state from `RECETAS_*` environment configuration.
    ///
    /// # Errors
    /// Returns an error if the recipe service cannot be created.
    pub fn from_env() -> Result<Arc<Self>, Box<dyn std::error::Error + Send + Sync>> {
        Self::with_config(RecipeConfig::from_env())
    }

    /// Create state from an explicit configuration.
    ///
    /// # Errors
    /// Returns an error if the recipe service cannot be created.
    pub fn with_config(
        config: RecipeConfig,
    ) -> Result<Arc<Self>, Box<dyn std::error::Error + Send + Sync>> {
        let service = RecipeService::new(config)
            .map_err(|e| format!("Failed to create recipe service: {e}"))?;

        Ok(Arc::new(Self { service }))
    }
}
