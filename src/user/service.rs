use sqlx::{Pool, Postgres};

use crate::ServerError;
use crate::error::Result;
use crate::user::{User, UserPatch, UserRepository};

/// User profile manager.
#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    /// Create a new [`UserService`].
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            repo: UserRepository::new(pool),
        }
    }

    /// Find user using `id` field.
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>> {
        self.repo.find_by_id(user_id).await
    }

    /// Update profile fields provided on `patch`, leaving others unchanged.
    pub async fn edit(&self, user_id: i32, patch: UserPatch) -> Result<User> {
        match self.repo.update(user_id, &patch).await {
            Err(ServerError::Sql(err))
                if err
                    .as_database_error()
                    .is_some_and(|e| e.is_unique_violation()) =>
            {
                Err(ServerError::Conflict {
                    email: patch.email.unwrap_or_default(),
                })
            },
            result => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlx::{Pool, Postgres};

    use super::*;

    #[sqlx::test(fixtures("../../fixtures/users.sql"))]
    async fn test_partial_edit_keeps_other_fields(pool: Pool<Postgres>) {
        let service = UserService::new(pool);

        let user = service
            .edit(
                900,
                UserPatch {
                    first_name: Some("Ada".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert_eq!(user.email, "intruder@email.com");
        assert_eq!(user.last_name, None);
    }

    #[sqlx::test(fixtures("../../fixtures/users.sql"))]
    async fn test_edit_to_taken_email_conflicts(pool: Pool<Postgres>) {
        let service = UserService::new(pool.clone());

        UserRepository::new(pool)
            .insert("someone@email.com", "hash")
            .await
            .unwrap();

        let err = service
            .edit(
                900,
                UserPatch {
                    email: Some("someone@email.com".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServerError::Conflict { .. }));
    }
}
