//! Handle database requests for users.

use sqlx::{Pool, Postgres};

use crate::error::Result;
use crate::user::{User, UserPatch};

#[derive(Clone)]
pub struct UserRepository {
    pool: Pool<Postgres>,
}

impl UserRepository {
    /// Create a new [`UserRepository`].
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert [`User`] into database.
    pub async fn insert(&self, email: &str, password: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (email, password)
                VALUES ($1, $2)
                RETURNING *"#,
        )
        .bind(email)
        .bind(password)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user using `id` field.
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>> {
        let user =
            sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(user)
    }

    /// Find user using `email` field. Exact, case-sensitive match.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT * FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Update user profile. Only provided fields are changed.
    pub async fn update(&self, user_id: i32, patch: &UserPatch) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"UPDATE users
                SET email = COALESCE($2, email),
                    first_name = COALESCE($3, first_name),
                    last_name = COALESCE($4, last_name),
                    updated_at = NOW()
                WHERE id = $1
                RETURNING *"#,
        )
        .bind(user_id)
        .bind(patch.email.as_deref())
        .bind(patch.first_name.as_deref())
        .bind(patch.last_name.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}
