//! Error types for the story gate
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Story Error Enum ==
/// Shape errors found while validating a Story request body.
///
/// Both kinds are client-input errors and both map to HTTP 400.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryError {
    /// A create/replace body is missing one or more recognized fields
    #[error("story body is missing one or more required fields")]
    InvalidStory,

    /// An update body contains no recognized field at all
    #[error("story changes contain no recognized field")]
    InvalidStoryChanges,
}

impl StoryError {
    /// Wire code sent back in the `error` field of the response body.
    pub fn code(&self) -> &'static str {
        match self {
            StoryError::InvalidStory => "InvalidStory",
            StoryError::InvalidStoryChanges => "InvalidStoryChanges",
        }
    }
}

// == Api Error Enum ==
/// Errors produced by the HTTP layer around the validators.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The body failed shape validation
    #[error(transparent)]
    Story(#[from] StoryError),

    /// The body could not be buffered within the configured limit
    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    /// The body stream failed before it was fully read
    #[error("Failed to read request body: {0}")]
    BadRequestBody(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Story(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::BadRequestBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Wire code sent back in the `error` field of the response body.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Story(err) => err.code(),
            ApiError::PayloadTooLarge(_) => "PayloadTooLarge",
            ApiError::BadRequestBody(_) => "BadRequestBody",
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for StoryError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.code()));
        (self.status(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the story gate.
pub type Result<T> = std::result::Result<T, ApiError>;
