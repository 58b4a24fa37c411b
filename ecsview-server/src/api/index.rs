//! Landing page handler

use axum::{extract::State, response::Response};

use crate::api::AppState;
use crate::render::Page;

/// GET /
/// Static landing page
pub async fn index(State(state): State<AppState>) -> Response {
    state.renderer.page(Page::Index, Ok(serde_json::json!({})))
}
