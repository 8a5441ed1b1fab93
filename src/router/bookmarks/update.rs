//! Edit one bookmark.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::bookmark::{Bookmark, BookmarkPatch, BookmarkService};
use crate::error::Result;
use crate::router::Valid;
use crate::user::User;

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(length(min = 2, message = "Title must contain at least 2 characters."))]
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

/// Handler to edit an owned bookmark. Only provided fields change.
pub async fn handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(bookmark_id): Path<i32>,
    Valid(body): Valid<Body>,
) -> Result<Json<Bookmark>> {
    let bookmark = BookmarkService::new(state.db.postgres.clone())
        .edit(
            user.id,
            bookmark_id,
            BookmarkPatch {
                title: body.title,
                link: body.link,
                description: body.description,
            },
        )
        .await?;

    Ok(Json(bookmark))
}

#[cfg(test)]
mod tests {
    use crate::*;
    use axum::http::{Method, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;
    use sqlx::{Pool, Postgres};

    #[sqlx::test]
    async fn test_update_description_only(pool: Pool<Postgres>) {
        let app = app(router::state(pool));
        let token = router::obtain_token(&app, "test@email.com").await;

        let response = make_request(
            app.clone(),
            Method::POST,
            "/bookmarks",
            Some(&token),
            json!({ "title": "Test1", "link": "google.com" }).to_string(),
        )
        .await;
        let created = response.into_body().collect().await.unwrap().to_bytes();
        let created: serde_json::Value = serde_json::from_slice(&created).unwrap();

        let path = format!("/bookmarks/{}", created["id"]);
        let response = make_request(
            app,
            Method::PATCH,
            &path,
            Some(&token),
            json!({ "description": "a search engine" }).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["description"], "a search engine");
        assert_eq!(body["title"], "Test1");
        assert_eq!(body["link"], "google.com");
    }

    #[sqlx::test]
    async fn test_update_foreign_bookmark_is_denied(pool: Pool<Postgres>) {
        let app = app(router::state(pool));
        let token = router::obtain_token(&app, "test@email.com").await;
        let other_token = router::obtain_token(&app, "other@email.com").await;

        let response = make_request(
            app.clone(),
            Method::POST,
            "/bookmarks",
            Some(&other_token),
            json!({ "title": "Other", "link": "example.com" }).to_string(),
        )
        .await;
        let created = response.into_body().collect().await.unwrap().to_bytes();
        let created: serde_json::Value = serde_json::from_slice(&created).unwrap();

        let path = format!("/bookmarks/{}", created["id"]);
        let response = make_request(
            app,
            Method::PATCH,
            &path,
            Some(&token),
            json!({ "title": "Stolen" }).to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
