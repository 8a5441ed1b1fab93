use sqlx::{Pool, Postgres};

use crate::ServerError;
use crate::bookmark::{Bookmark, BookmarkPatch, BookmarkRepository, NewBookmark};
use crate::error::Result;

/// Bookmark manager, enforcing ownership on every operation.
///
/// Reads on a foreign or missing bookmark come back empty; mutations
/// fail with [`ServerError::Forbidden`]. The asymmetry is part of the
/// observable API and is kept on purpose.
#[derive(Clone)]
pub struct BookmarkService {
    repo: BookmarkRepository,
}

impl BookmarkService {
    /// Create a new [`BookmarkService`].
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            repo: BookmarkRepository::new(pool),
        }
    }

    /// All bookmarks owned by `user_id`.
    pub async fn list(&self, user_id: i32) -> Result<Vec<Bookmark>> {
        self.repo.find_all(user_id).await
    }

    /// Create a bookmark owned by `user_id`.
    pub async fn create(
        &self,
        user_id: i32,
        bookmark: NewBookmark,
    ) -> Result<Bookmark> {
        self.repo.insert(user_id, &bookmark).await
    }

    /// Get one bookmark, or nothing if missing or owned by another user.
    pub async fn get(
        &self,
        user_id: i32,
        bookmark_id: i32,
    ) -> Result<Option<Bookmark>> {
        self.repo.find_one(user_id, bookmark_id).await
    }

    /// Merge provided fields into an owned bookmark.
    pub async fn edit(
        &self,
        user_id: i32,
        bookmark_id: i32,
        patch: BookmarkPatch,
    ) -> Result<Bookmark> {
        if self.repo.find_one(user_id, bookmark_id).await?.is_none() {
            return Err(ServerError::Forbidden);
        }

        self.repo.update(user_id, bookmark_id, &patch).await
    }

    /// Delete an owned bookmark permanently.
    pub async fn delete(&self, user_id: i32, bookmark_id: i32) -> Result<()> {
        if self.repo.find_one(user_id, bookmark_id).await?.is_none() {
            return Err(ServerError::Forbidden);
        }

        self.repo.delete(user_id, bookmark_id).await?;
        Ok(())
    }
}
