//! Get one bookmark.

use axum::extract::{Path, State};
use axum::{Extension, Json};

use crate::AppState;
use crate::bookmark::{Bookmark, BookmarkService};
use crate::error::Result;
use crate::user::User;

/// Handler returning one owned bookmark.
///
/// A missing or foreign bookmark is answered with a `null` body, not a
/// permission error, so existence never leaks.
pub async fn handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(bookmark_id): Path<i32>,
) -> Result<Json<Option<Bookmark>>> {
    let bookmark = BookmarkService::new(state.db.postgres.clone())
        .get(user.id, bookmark_id)
        .await?;

    Ok(Json(bookmark))
}
