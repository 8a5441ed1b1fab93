//! Edit current user profile.

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::error::Result;
use crate::router::Valid;
use crate::user::{User, UserPatch, UserService};

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    #[validate(email(message = "Email must be formatted."))]
    pub email: Option<String>,
    #[validate(length(min = 2, message = "First name is too short."))]
    pub first_name: Option<String>,
    #[validate(length(min = 2, message = "Last name is too short."))]
    pub last_name: Option<String>,
}

/// Handler to edit profile fields of the authenticated user.
pub async fn handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Valid(body): Valid<Body>,
) -> Result<Json<User>> {
    let service = UserService::new(state.db.postgres.clone());
    let user = service
        .edit(
            user.id,
            UserPatch {
                email: body.email,
                first_name: body.first_name,
                last_name: body.last_name,
            },
        )
        .await?;

    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use crate::*;
    use axum::http::{Method, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;
    use sqlx::{Pool, Postgres};

    #[sqlx::test]
    async fn test_update_me_handler(pool: Pool<Postgres>) {
        let app = app(router::state(pool));
        let token = router::obtain_token(&app, "test@email.com").await;

        let response = make_request(
            app,
            Method::PATCH,
            "/users/@me",
            Some(&token),
            json!({ "firstName": "Ada" }).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["firstName"], "Ada");
        // untouched fields keep their value.
        assert_eq!(body["email"], "test@email.com");
        assert!(body.get("password").is_none());
    }

    #[sqlx::test]
    async fn test_update_me_rejects_invalid_email(pool: Pool<Postgres>) {
        let app = app(router::state(pool));
        let token = router::obtain_token(&app, "test@email.com").await;

        let response = make_request(
            app,
            Method::PATCH,
            "/users/@me",
            Some(&token),
            json!({ "email": "not-an-email" }).to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
