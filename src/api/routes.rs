//! API Routes
//!
//! Installs the story validators in front of story handlers and builds the
//! demo router.

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post, put, MethodRouter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{create_story_handler, health_handler, update_story_handler, AppState};
use crate::validation::{validate_story, validate_story_changes};

/// Wraps caller-supplied story handlers with the validation middleware.
///
/// # Routes
/// - `/stories` - `create`, guarded by [`validate_story`]
/// - `/stories/:id` - `update`, guarded by [`validate_story_changes`]
///
/// The validators are added as route layers, so a method with no handler
/// still answers 405 without its body being read. The handlers' body
/// extractors get the same limit as the validators.
pub fn story_routes<S>(
    gate: AppState,
    create: MethodRouter<S>,
    update: MethodRouter<S>,
) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let body_limit = DefaultBodyLimit::max(gate.max_body_bytes);

    Router::new()
        .route(
            "/stories",
            create.route_layer(from_fn_with_state(gate.clone(), validate_story)),
        )
        .route(
            "/stories/:id",
            update.route_layer(from_fn_with_state(gate, validate_story_changes)),
        )
        .layer(body_limit)
}

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /stories` - Create a story
/// - `PUT /stories/:id` - Change a story
/// - `PATCH /stories/:id` - Change a story
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let stories = story_routes(
        state,
        post(create_story_handler),
        put(update_story_handler).patch(update_story_handler),
    );

    Router::new()
        .merge(stories)
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
