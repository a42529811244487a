//! Story Gate - Request-shape validation for the Story API
//!
//! Provides middleware that checks a Story request body for the recognized
//! fields before the request reaches a database-writing handler.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;

pub use api::{story_routes, AppState};
pub use config::Config;
pub use error::{ApiError, StoryError};
pub use validation::{validate_story, validate_story_changes, StoryRule, RECOGNIZED_FIELDS};
