//! Integration tests for the chat page and static assets

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use serde_json::json;
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_string, post_chat, session_cookie, test_app};

    #[tokio::test]
    async fn it_serves_chat_page_with_session_cookie() {
        let app = test_app();

        let response = app
            .router
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.starts_with("session_id="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("Path=/"));

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("WattSaver"));
        assert!(body.contains("/static/js/script.js"));

        // Visiting the page never starts a conversation
        assert!(app.sessions.is_empty());
        assert_eq!(app.model.call_count(), 0);
    }

    #[tokio::test]
    async fn it_keeps_existing_session_cookie() {
        let app = test_app();

        let first = app
            .router
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let cookie = session_cookie(&first).unwrap();

        let second = app
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(second.status(), StatusCode::OK);
        assert!(session_cookie(&second).is_none());
    }

    /// Tests the session issued by the page is the one used for chat
    #[tokio::test]
    async fn it_uses_page_session_for_chat() {
        let app = test_app();

        let page = app
            .router
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let cookie = session_cookie(&page).unwrap();

        let body = json!({ "message": "Hi" }).to_string();
        let first = post_chat(&app.router, &body, Some(&cookie)).await;
        let second = post_chat(&app.router, &body, Some(&cookie)).await;

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::OK);
        assert!(session_cookie(&first).is_none());
        assert_eq!(app.sessions.len(), 1);
    }

    #[tokio::test]
    async fn it_serves_static_assets() {
        let app = test_app();

        let response = app
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/static/js/script.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("/chat"));
    }

    #[tokio::test]
    async fn it_returns_404_for_missing_asset() {
        let app = test_app();

        let response = app
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/static/js/missing.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
