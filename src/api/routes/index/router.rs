//! Router for the chat page

use anyhow::{Error, Result};
use axum::{Router, extract::State, response::Html, routing::get};
use axum_extra::extract::cookie::SignedCookieJar;
use handlebars::Handlebars;
use serde_json::json;

use crate::ai::prompt::{ASSISTANT_NAME, WELCOME_MESSAGE};
use crate::api::public::ApiError;
use crate::api::session::ensure_session_id;
use crate::api::state::AppState;

const INDEX_TEMPLATE: &str = include_str!("../../../../web-ui/templates/index.hbs");

/// Build the template registry used for every page render
pub fn templates() -> Result<Handlebars<'static>, Error> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_template_string("index", INDEX_TEMPLATE)?;
    Ok(registry)
}

/// Render the chat page. Handlebars escapes every value so the
/// welcome message can be embedded as-is.
pub fn render_index(templates: &Handlebars<'_>) -> Result<String, Error> {
    let html = templates.render(
        "index",
        &json!({
            "assistant_name": ASSISTANT_NAME,
            "welcome": WELCOME_MESSAGE,
        }),
    )?;
    Ok(html)
}

/// Serve the chat page, issuing a session id if the caller has none
async fn index(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), ApiError> {
    let (jar, _session_id) = ensure_session_id(jar);
    let html = render_index(&state.templates)?;
    Ok((jar, Html(html)))
}

/// Create the index router
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
