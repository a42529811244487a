//! API Handlers
//!
//! Stand-in handlers for the story endpoints. They run only after the
//! validation middleware has accepted the body and echo it back without
//! persisting anything.

use axum::{extract::Path, http::StatusCode, Json};

use crate::config::Config;
use crate::models::{HealthResponse, StoryBody, StoryCreatedResponse, StoryUpdatedResponse};

/// State shared with the validation middleware.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Largest request body the validators will buffer, in bytes
    pub max_body_bytes: usize,
}

impl AppState {
    /// Creates a new AppState with the given body limit.
    pub fn new(max_body_bytes: usize) -> Self {
        Self { max_body_bytes }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_body_bytes)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Handler for POST /stories
///
/// Echoes the accepted story with 201 Created.
pub async fn create_story_handler(
    Json(story): Json<StoryBody>,
) -> (StatusCode, Json<StoryCreatedResponse>) {
    (StatusCode::CREATED, Json(StoryCreatedResponse::new(story)))
}

/// Handler for PUT/PATCH /stories/:id
///
/// Echoes the accepted changes together with the story id.
pub async fn update_story_handler(
    Path(id): Path<String>,
    Json(changes): Json<StoryBody>,
) -> Json<StoryUpdatedResponse> {
    Json(StoryUpdatedResponse::new(id, changes))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
