//! Request DTOs for the story API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde_json::{Map, Value};

/// Request body for story creation and story changes.
///
/// Kept as a raw JSON object: only key presence is checked, values are
/// passed through to the next stage untouched.
pub type StoryBody = Map<String, Value>;
