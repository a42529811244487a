//! Response DTOs for the story API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use super::StoryBody;

/// Response body for story creation (POST /stories)
#[derive(Debug, Clone, Serialize)]
pub struct StoryCreatedResponse {
    /// The accepted story
    pub story: StoryBody,
}

impl StoryCreatedResponse {
    /// Creates a new StoryCreatedResponse
    pub fn new(story: StoryBody) -> Self {
        Self { story }
    }
}

/// Response body for story changes (PUT/PATCH /stories/:id)
#[derive(Debug, Clone, Serialize)]
pub struct StoryUpdatedResponse {
    /// Identifier of the story being changed
    pub id: String,
    /// The accepted changes
    pub changes: StoryBody,
}

impl StoryUpdatedResponse {
    /// Creates a new StoryUpdatedResponse
    pub fn new(id: impl Into<String>, changes: StoryBody) -> Self {
        Self {
            id: id.into(),
            changes,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all rejections
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code, e.g. `InvalidStory`
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
