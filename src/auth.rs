//! Signup and signin orchestration.

use std::sync::Arc;

use sqlx::{Pool, Postgres};

use crate::ServerError;
use crate::crypto::Crypto;
use crate::error::Result;
use crate::token::TokenManager;
use crate::user::{User, UserRepository};

/// Account registration and authentication.
#[derive(Clone)]
pub struct AuthService {
    repo: UserRepository,
    crypto: Arc<Crypto>,
    token: TokenManager,
}

impl AuthService {
    /// Create a new [`AuthService`].
    pub fn new(
        pool: Pool<Postgres>,
        crypto: Arc<Crypto>,
        token: TokenManager,
    ) -> Self {
        Self {
            repo: UserRepository::new(pool),
            crypto,
            token,
        }
    }

    /// Hash password and persist a new account.
    ///
    /// An already-used email fails with [`ServerError::Conflict`].
    pub async fn signup(&self, email: &str, password: &str) -> Result<User> {
        let hash = self.crypto.hash_password(password)?;

        match self.repo.insert(email, &hash).await {
            Err(ServerError::Sql(err))
                if err
                    .as_database_error()
                    .is_some_and(|e| e.is_unique_violation()) =>
            {
                Err(ServerError::Conflict {
                    email: email.to_owned(),
                })
            },
            result => result,
        }
    }

    /// Verify credentials and issue an access token.
    ///
    /// Unknown email and wrong password fail with the same
    /// [`ServerError::BadCredentials`] shape.
    pub async fn signin(&self, email: &str, password: &str) -> Result<String> {
        let user = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or(ServerError::BadCredentials)?;

        self.crypto
            .verify_password(password, &user.password)
            .map_err(|_| ServerError::BadCredentials)?;

        self.token.create(user.id, &user.email)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::{Pool, Postgres};

    use super::*;
    use crate::config::Argon2;

    fn service(pool: Pool<Postgres>) -> AuthService {
        let argon2 = Argon2 {
            memory_cost: 1024 * 8,
            iterations: 1,
            parallelism: 1,
            hash_length: 32,
        };

        AuthService::new(
            pool,
            Arc::new(Crypto::new(Some(argon2)).unwrap()),
            TokenManager::new("http://localhost/", "secret-for-tests"),
        )
    }

    #[sqlx::test]
    async fn test_signup_then_signin(pool: Pool<Postgres>) {
        let auth = service(pool);

        let user = auth
            .signup("test@email.com", "qwertyuiop123")
            .await
            .unwrap();
        assert_eq!(user.email, "test@email.com");
        assert!(user.password.starts_with("$argon2id$"));

        let token = auth
            .signin("test@email.com", "qwertyuiop123")
            .await
            .unwrap();
        assert!(token.is_ascii());
    }

    #[sqlx::test]
    async fn test_duplicate_email_conflicts(pool: Pool<Postgres>) {
        let auth = service(pool);

        auth.signup("test@email.com", "qwertyuiop123")
            .await
            .unwrap();
        let err = auth
            .signup("test@email.com", "another-password")
            .await
            .unwrap_err();

        assert!(matches!(err, ServerError::Conflict { .. }));
    }

    #[sqlx::test]
    async fn test_signin_failures_are_indistinguishable(pool: Pool<Postgres>) {
        let auth = service(pool);

        auth.signup("test@email.com", "qwertyuiop123")
            .await
            .unwrap();

        let wrong_password = auth
            .signin("test@email.com", "bad-password")
            .await
            .unwrap_err();
        let unknown_email = auth
            .signin("nobody@email.com", "qwertyuiop123")
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, ServerError::BadCredentials));
        assert!(matches!(unknown_email, ServerError::BadCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }
}
