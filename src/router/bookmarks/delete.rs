//! Delete one bookmark.

use axum::extract::{Path, State};
use axum::{Extension, http::StatusCode};

use crate::AppState;
use crate::bookmark::BookmarkService;
use crate::error::Result;
use crate::user::User;

/// Handler to delete an owned bookmark. Hard delete, no tombstone.
pub async fn handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(bookmark_id): Path<i32>,
) -> Result<StatusCode> {
    BookmarkService::new(state.db.postgres.clone())
        .delete(user.id, bookmark_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
