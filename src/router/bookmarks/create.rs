//! Create a bookmark.

use axum::{Extension, Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppState;
use crate::bookmark::{Bookmark, BookmarkService, NewBookmark};
use crate::error::Result;
use crate::router::Valid;
use crate::user::User;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct Body {
    #[validate(length(min = 2, message = "Title must contain at least 2 characters."))]
    pub title: String,
    pub link: String,
    pub description: Option<String>,
}

/// Handler to create a bookmark.
///
/// The owner is always the authenticated user, never the payload.
pub async fn handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Valid(body): Valid<Body>,
) -> Result<(StatusCode, Json<Bookmark>)> {
    let bookmark = BookmarkService::new(state.db.postgres.clone())
        .create(
            user.id,
            NewBookmark {
                title: body.title,
                link: body.link,
                description: body.description,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(bookmark)))
}
