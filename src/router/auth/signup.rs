use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::auth::AuthService;
use crate::error::Result;
use crate::router::Valid;
use crate::user::User;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(email(message = "Email must be formatted."))]
    pub email: String,
    #[validate(length(
        min = 10,
        max = 255,
        message = "Password must contain at least 10 characters."
    ))]
    pub password: String,
}

/// Handler to create user.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<(StatusCode, Json<User>)> {
    let auth = AuthService::new(
        state.db.postgres.clone(),
        Arc::clone(&state.crypto),
        state.token.clone(),
    );
    let user = auth.signup(&body.email, &body.password).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;
    use axum::http::Method;
    use http_body_util::BodyExt;
    use serde_json::json;
    use sqlx::{Pool, Postgres};

    #[sqlx::test]
    async fn test_signup_handler(pool: Pool<Postgres>) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::POST,
            "/auth/signup",
            None,
            json!({ "email": "test@email.com", "password": "qwertyuiop123" })
                .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["email"], "test@email.com");
        assert!(body["id"].is_number());
        // the hash must never appear on any representation.
        assert!(body.get("password").is_none());
    }

    #[sqlx::test]
    async fn test_signup_duplicate_email(pool: Pool<Postgres>) {
        let app = app(router::state(pool));
        let body = json!({
            "email": "test@email.com",
            "password": "qwertyuiop123",
        })
        .to_string();

        let response = make_request(
            app.clone(),
            Method::POST,
            "/auth/signup",
            None,
            body.clone(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response =
            make_request(app, Method::POST, "/auth/signup", None, body).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[sqlx::test]
    async fn test_signup_rejects_short_password(pool: Pool<Postgres>) {
        let app = app(router::state(pool));

        let response = make_request(
            app,
            Method::POST,
            "/auth/signup",
            None,
            json!({ "email": "test@email.com", "password": "short" })
                .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
