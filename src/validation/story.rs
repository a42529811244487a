//! Story Field Rules
//!
//! Pure key-presence checks against the fixed set of recognized Story fields.
//! Values are never inspected.

use crate::error::StoryError;
use crate::models::StoryBody;

// == Public Constants ==
/// Fields a Story body may carry, in canonical order.
pub const RECOGNIZED_FIELDS: [&str; 4] = ["Title", "URL", "WritingPrompt", "DrawingPrompt"];

/// Counts the distinct recognized fields present as keys in `body`.
///
/// Keys are matched case-sensitively; unrecognized keys are ignored.
pub fn matching_field_count(body: &StoryBody) -> usize {
    RECOGNIZED_FIELDS
        .iter()
        .filter(|field| body.contains_key(**field))
        .count()
}

/// Create/replace check: every recognized field must be present.
pub fn check_story(body: &StoryBody) -> Result<(), StoryError> {
    if matching_field_count(body) == RECOGNIZED_FIELDS.len() {
        Ok(())
    } else {
        Err(StoryError::InvalidStory)
    }
}

/// Update check: at least one recognized field must be present.
pub fn check_story_changes(body: &StoryBody) -> Result<(), StoryError> {
    if matching_field_count(body) > 0 {
        Ok(())
    } else {
        Err(StoryError::InvalidStoryChanges)
    }
}

// == Story Rule ==
/// Which check a route applies to its request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryRule {
    /// Full story, used on creation/replacement
    Full,
    /// Partial changes, used on update
    Changes,
}

impl StoryRule {
    /// Runs the rule's check against `body`.
    pub fn check(self, body: &StoryBody) -> Result<(), StoryError> {
        match self {
            StoryRule::Full => check_story(body),
            StoryRule::Changes => check_story_changes(body),
        }
    }

    /// Short name used in log events.
    pub fn name(self) -> &'static str {
        match self {
            StoryRule::Full => "story",
            StoryRule::Changes => "story_changes",
        }
    }
}
