//! API routes module

pub mod chat;
pub mod index;

use axum::Router;

use crate::api::state::AppState;

/// Create the combined router
pub fn router() -> Router<AppState> {
    Router::new()
        // Chat page
        .merge(index::router())
        // Chat messages
        .merge(chat::router())
}
