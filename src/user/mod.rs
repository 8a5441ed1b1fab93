mod repository;
mod service;

pub use repository::*;
pub use service::*;

use serde::{Deserialize, Serialize};

/// User as saved on database.
///
/// `password` holds the Argon2id PHC string and is never serialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip)]
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Partial profile update. `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
