use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::auth::AuthService;
use crate::error::Result;
use crate::router::Valid;

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

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub access_token: String,
}

/// Handler to log user in.
pub async fn handler(
    State(state): State<AppState>,
    Valid(body): Valid<Body>,
) -> Result<Json<Response>> {
    let auth = AuthService::new(
        state.db.postgres.clone(),
        Arc::clone(&state.crypto),
        state.token.clone(),
    );
    let access_token = auth.signin(&body.email, &body.password).await?;

    Ok(Json(Response { access_token }))
}
