//! Router for the chat API

use anyhow::{Context, Error, Result};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::post,
};
use axum_extra::extract::cookie::SignedCookieJar;

use super::public;
use crate::api::public::ApiError;
use crate::api::session::ensure_session_id;
use crate::api::state::AppState;
use crate::sessions::SessionRegistry;

/// Send `message` in the session's conversation. If the model call
/// fails the conversation is thrown away and the message is sent once
/// more in a freshly seeded one.
async fn send_with_retry(
    sessions: &SessionRegistry,
    session_id: &str,
    message: &str,
) -> Result<String, Error> {
    let conversation = sessions.get_or_create(session_id);
    let first_attempt = conversation.lock().await.send_message(message).await;

    match first_attempt {
        Ok(reply) => Ok(reply),
        Err(e) => {
            tracing::error!(
                "Chat handler error for session {}: {}. Root cause: {}",
                session_id,
                e,
                e.root_cause()
            );
            tracing::debug!("Error details: {:?}", e);

            sessions.reset(session_id);
            let conversation = sessions.get_or_create(session_id);
            let reply = conversation
                .lock()
                .await
                .send_message(message)
                .await
                .context("Error after retry")?;

            Ok(reply)
        }
    }
}

async fn reply(
    sessions: &SessionRegistry,
    session_id: &str,
    payload: Result<Json<public::ChatRequest>, JsonRejection>,
) -> Result<Json<public::ChatResponse>, ApiError> {
    let message = match payload {
        Ok(Json(req)) => req.message.unwrap_or_default(),
        Err(rejection) => {
            tracing::debug!("Rejected chat payload: {}", rejection);
            String::new()
        }
    };

    if message.is_empty() {
        return Err(ApiError::BadRequest(public::NO_MESSAGE_ERROR.to_string()));
    }

    let response = send_with_retry(sessions, session_id, &message).await?;

    Ok(Json(public::ChatResponse { response }))
}

/// Send a message in the caller's conversation and return the reply
async fn chat_handler(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    payload: Result<Json<public::ChatRequest>, JsonRejection>,
) -> impl IntoResponse {
    let (jar, session_id) = ensure_session_id(jar);
    let result = reply(&state.sessions, &session_id, payload).await;
    (jar, result)
}

/// Create the chat router
pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(chat_handler))
}
