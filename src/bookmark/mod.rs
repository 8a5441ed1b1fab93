mod repository;
mod service;

pub use repository::*;
pub use service::*;

use serde::{Deserialize, Serialize};

/// Bookmark as saved on database. Owned by exactly one user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Fields required to create a bookmark. The owner is never part of it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewBookmark {
    pub title: String,
    pub link: String,
    pub description: Option<String>,
}

/// Partial bookmark update. `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}
