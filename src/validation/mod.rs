//! Validation Module
//!
//! Shape checks for Story request bodies and the axum middleware that runs
//! them in front of the story handlers.

mod middleware;
mod story;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use middleware::{validate_story, validate_story_changes};
pub use story::{
    check_story, check_story_changes, matching_field_count, StoryRule, RECOGNIZED_FIELDS,
};
