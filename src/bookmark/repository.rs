//! Handle database requests for bookmarks.
//!
//! Every read and write is scoped by `user_id`: a bookmark owned by
//! another user behaves exactly like a missing row.

use sqlx::{Pool, Postgres};

use crate::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use crate::error::Result;

#[derive(Clone)]
pub struct BookmarkRepository {
    pool: Pool<Postgres>,
}

impl BookmarkRepository {
    /// Create a new [`BookmarkRepository`].
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new [`Bookmark`] owned by `user_id`.
    pub async fn insert(
        &self,
        user_id: i32,
        bookmark: &NewBookmark,
    ) -> Result<Bookmark> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            r#"INSERT INTO bookmarks (user_id, title, link, description)
                VALUES ($1, $2, $3, $4)
                RETURNING *"#,
        )
        .bind(user_id)
        .bind(&bookmark.title)
        .bind(&bookmark.link)
        .bind(bookmark.description.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(bookmark)
    }

    /// All bookmarks owned by `user_id`, in insertion order.
    pub async fn find_all(&self, user_id: i32) -> Result<Vec<Bookmark>> {
        let bookmarks = sqlx::query_as::<_, Bookmark>(
            r#"SELECT * FROM bookmarks WHERE user_id = $1 ORDER BY id"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookmarks)
    }

    /// Find one bookmark by `id`, restricted to `user_id`.
    pub async fn find_one(
        &self,
        user_id: i32,
        bookmark_id: i32,
    ) -> Result<Option<Bookmark>> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            r#"SELECT * FROM bookmarks WHERE id = $1 AND user_id = $2"#,
        )
        .bind(bookmark_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bookmark)
    }

    /// Update provided fields of a bookmark, restricted to `user_id`.
    pub async fn update(
        &self,
        user_id: i32,
        bookmark_id: i32,
        patch: &BookmarkPatch,
    ) -> Result<Bookmark> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            r#"UPDATE bookmarks
                SET title = COALESCE($3, title),
                    link = COALESCE($4, link),
                    description = COALESCE($5, description),
                    updated_at = NOW()
                WHERE id = $1 AND user_id = $2
                RETURNING *"#,
        )
        .bind(bookmark_id)
        .bind(user_id)
        .bind(patch.title.as_deref())
        .bind(patch.link.as_deref())
        .bind(patch.description.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(bookmark)
    }

    /// Delete a bookmark permanently, restricted to `user_id`.
    pub async fn delete(&self, user_id: i32, bookmark_id: i32) -> Result<u64> {
        let result = sqlx::query(
            r#"DELETE FROM bookmarks WHERE id = $1 AND user_id = $2"#,
        )
        .bind(bookmark_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
