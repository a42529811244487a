//! API Module
//!
//! HTTP handlers and routing for the story API.
//!
//! # Endpoints
//! - `POST /stories` - Create a story (full validation)
//! - `PUT /stories/:id` - Change a story (partial validation)
//! - `PATCH /stories/:id` - Change a story (partial validation)
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, story_routes};
