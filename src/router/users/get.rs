//! Get current user.

use axum::{Extension, Json};

use crate::error::Result;
use crate::user::User;

/// Handler returning the authenticated user.
pub async fn handler(Extension(user): Extension<User>) -> Result<Json<User>> {
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use crate::*;
    use axum::http::{Method, StatusCode};
    use http_body_util::BodyExt;
    use sqlx::{Pool, Postgres};

    #[sqlx::test]
    async fn test_get_me_handler(pool: Pool<Postgres>) {
        let app = app(router::state(pool));
        let token = router::obtain_token(&app, "test@email.com").await;

        let response = make_request(
            app,
            Method::GET,
            "/users/@me",
            Some(&token),
            String::default(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["email"], "test@email.com");
        assert!(body.get("password").is_none());
    }

    #[sqlx::test]
    async fn test_get_me_without_token(pool: Pool<Postgres>) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::GET,
            "/users/@me",
            None,
            String::default(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[sqlx::test]
    async fn test_get_me_with_garbage_token(pool: Pool<Postgres>) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::GET,
            "/users/@me",
            Some("not-a-token"),
            String::default(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
