//! List own bookmarks.

use axum::{Extension, Json, extract::State};

use crate::AppState;
use crate::bookmark::{Bookmark, BookmarkService};
use crate::error::Result;
use crate::user::User;

/// Handler returning every bookmark owned by the authenticated user.
pub async fn handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<Bookmark>>> {
    let bookmarks = BookmarkService::new(state.db.postgres.clone())
        .list(user.id)
        .await?;

    Ok(Json(bookmarks))
}
