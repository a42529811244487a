//! Story Validation Middleware
//!
//! Axum middleware that buffers the request body, checks its shape and
//! either forwards the request unchanged or ends the pipeline with the
//! rule's error response.

use std::error::Error as StdError;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;
use serde_json::Value;
use tracing::debug;

use crate::api::AppState;
use crate::error::{ApiError, Result};
use crate::models::StoryBody;
use crate::validation::StoryRule;

/// Middleware for story creation/replacement routes.
///
/// Forwards the request only if the body carries every recognized field,
/// otherwise responds `400 {"error":"InvalidStory"}`.
///
/// # Example
/// ```ignore
/// let route = post(handler).route_layer(from_fn_with_state(state, validate_story));
/// ```
pub async fn validate_story(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    gate(StoryRule::Full, &state, request, next).await
}

/// Middleware for story update routes.
///
/// Forwards the request if the body carries at least one recognized field,
/// otherwise responds `400 {"error":"InvalidStoryChanges"}`.
pub async fn validate_story_changes(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    gate(StoryRule::Changes, &state, request, next).await
}

async fn gate(
    rule: StoryRule,
    state: &AppState,
    request: Request<Body>,
    next: Next,
) -> Response {
    match inspect(rule, state.max_body_bytes, request).await {
        Ok(request) => next.run(request).await,
        Err(err) => {
            debug!(rule = rule.name(), error = err.code(), "Rejected story request");
            err.into_response()
        }
    }
}

/// Buffers the body, applies `rule` and rebuilds the request from the same bytes.
///
/// A body without a JSON content type is checked as an empty object.
async fn inspect(
    rule: StoryRule,
    limit: usize,
    request: Request<Body>,
) -> Result<Request<Body>> {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, limit)
        .await
        .map_err(|err| read_error(err, limit))?;

    let story = if has_json_content_type(&parts.headers) {
        decode_body(&bytes)
    } else {
        StoryBody::new()
    };
    rule.check(&story)?;

    Ok(Request::from_parts(parts, Body::from(bytes)))
}

/// Maps a buffering failure to 413 only when the length limit was hit.
fn read_error(err: axum::Error, limit: usize) -> ApiError {
    let over_limit = std::iter::successors(Some(&err as &(dyn StdError + 'static)), |e| (*e).source())
        .any(|e| e.is::<LengthLimitError>());

    if over_limit {
        ApiError::PayloadTooLarge(limit)
    } else {
        ApiError::BadRequestBody(err.to_string())
    }
}

/// Same acceptance rule as axum's `Json` extractor: `application/json`
/// or any `application/*+json`.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Reads the key set of a JSON object body.
///
/// Anything that is not a JSON object decodes to an empty body.
fn decode_body(bytes: &Bytes) -> StoryBody {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => map,
        _ => StoryBody::new(),
    }
}
