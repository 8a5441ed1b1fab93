pub mod auth;
pub mod bookmarks;
pub mod users;

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::ServerError;

/// JSON extractor running `validator` checks before the handler.
pub struct Valid<T>(pub T);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ServerError;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Valid(value))
    }
}

/// Application state for handler tests.
#[cfg(test)]
pub fn state(pool: sqlx::PgPool) -> crate::AppState {
    use std::sync::Arc;

    // low-cost hashing to keep tests fast.
    let argon2 = crate::config::Argon2 {
        memory_cost: 1024 * 8,
        iterations: 1,
        parallelism: 1,
        hash_length: 32,
    };

    crate::AppState {
        config: Arc::new(crate::config::Configuration::default()),
        db: crate::database::Database { postgres: pool },
        crypto: Arc::new(crate::crypto::Crypto::new(Some(argon2)).unwrap()),
        token: crate::token::TokenManager::new(
            "http://localhost/",
            "secret-for-tests",
        ),
    }
}

/// Register `email` and return its access token.
#[cfg(test)]
pub async fn obtain_token(app: &axum::Router, email: &str) -> String {
    use axum::http::Method;
    use http_body_util::BodyExt;
    use serde_json::json;

    use crate::make_request;

    const PASSWORD: &str = "qwertyuiop123";

    let response = make_request(
        app.clone(),
        Method::POST,
        "/auth/signup",
        None,
        json!({ "email": email, "password": PASSWORD }).to_string(),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);

    let response = make_request(
        app.clone(),
        Method::POST,
        "/auth/signin",
        None,
        json!({ "email": email, "password": PASSWORD }).to_string(),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    body["accessToken"].as_str().unwrap().to_owned()
}
