//! Session id transport over a signed cookie

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "session_id";

/// Return the session id carried by `jar`, issuing a new one if there
/// isn't one. Cookies that fail signature verification never show up
/// in the jar so they are treated as missing. The returned jar must be
/// part of the response for a newly issued id to reach the client.
pub fn ensure_session_id(jar: SignedCookieJar) -> (SignedCookieJar, String) {
    if let Some(cookie) = jar.get(SESSION_COOKIE)
        && !cookie.value().is_empty()
    {
        return (jar, cookie.value().to_string());
    }

    let session_id = Uuid::new_v4().to_string();
    tracing::debug!("Issued session {}", session_id);

    let cookie = Cookie::build((SESSION_COOKIE, session_id.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    (jar.add(cookie), session_id)
}
