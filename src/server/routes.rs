//! HTTP route handlers for the recipe API.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::recipe::{FormSubmission, RecipeRecord};

use super::state::AppState;

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/recipe", post(generate_recipe))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "recetas-8020",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Generated recipe plus its ready-to-share renderings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    /// The structured recipe.
    pub recipe: RecipeRecord,
    /// Plain text block for copy-to-clipboard.
    pub share_text: String,
    /// Text block with WhatsApp markup.
    pub whatsapp_text: String,
    /// `wa.me` link with the recipe prefilled.
    pub whatsapp_url: String,
}

impl From<RecipeRecord> for RecipeResponse {
    fn from(recipe: RecipeRecord) -> Self {
        let share_text = recipe.share_text();
        let whatsapp_text = recipe.whatsapp_text();
        let whatsapp_url = recipe.whatsapp_share_url();
        Self {
            recipe,
            share_text,
            whatsapp_text,
            whatsapp_url,
        }
    }
}

/// Handle recipe generation requests.
async fn generate_recipe(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<FormSubmission>,
) -> Result<Json<RecipeResponse>, (StatusCode, String)> {
    submission
        .validate()
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    let record = state
        .service
        .generate(&submission)
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    Ok(Json(RecipeResponse::from(record)))
}
