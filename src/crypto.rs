//! Password hashing with Argon2id and PHC string format.

use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::{Argon2, Params, Version};
use rand::rngs::OsRng;

use crate::config::Argon2 as ArgonConfig;

type Result<T> = std::result::Result<T, CryptoError>;

#[derive(thiserror::Error, Debug)]
pub enum CryptoError {
    #[error("argon2 error: {0}")]
    Argon2(String),

    #[error("password does not match stored hash")]
    InvalidPassword,
}

/// Cryptographic manager.
pub struct Crypto {
    params: Params,
}

impl Crypto {
    /// Create a new [`Crypto`] with optional Argon2 parameters.
    pub fn new(config: Option<ArgonConfig>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let params = Params::new(
            config.memory_cost,
            config.iterations,
            config.parallelism,
            Some(config.hash_length),
        )
        .map_err(|err| CryptoError::Argon2(err.to_string()))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2 {
        Argon2::new(
            argon2::Algorithm::Argon2id,
            Version::V0x13,
            self.params.clone(),
        )
    }

    /// Hash password using Argon2id with a random salt.
    pub fn hash_password(&self, password: impl AsRef<[u8]>) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(password.as_ref(), &salt)
            .map_err(|e| CryptoError::Argon2(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Verify password against a PHC string.
    pub fn verify_password(
        &self,
        password: impl AsRef<[u8]>,
        phc_hash: &str,
    ) -> Result<()> {
        let parsed = PasswordHash::new(phc_hash)
            .map_err(|_| CryptoError::InvalidPassword)?;

        self.argon2()
            .verify_password(password.as_ref(), &parsed)
            .map_err(|_| CryptoError::InvalidPassword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crypto() -> Crypto {
        // low-cost parameters to keep tests fast.
        Crypto::new(Some(ArgonConfig {
            memory_cost: 1024 * 8,
            iterations: 1,
            parallelism: 1,
            hash_length: 32,
        }))
        .unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let crypto = crypto();
        let hash = crypto.hash_password("qwertyuiop123").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(crypto.verify_password("qwertyuiop123", &hash).is_ok());
        assert!(crypto.verify_password("wrong-password", &hash).is_err());
    }

    #[test]
    fn test_hashes_are_salted() {
        let crypto = crypto();
        let first = crypto.hash_password("qwertyuiop123").unwrap();
        let second = crypto.hash_password("qwertyuiop123").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_phc_rejected() {
        let crypto = crypto();
        assert!(crypto.verify_password("password", "not-a-phc").is_err());
    }
}
