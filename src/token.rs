//! Manage json web tokens.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Token lifetime, in seconds.
pub const EXPIRATION_TIME: u64 = 60 * 15; // 15 minutes.

/// Pieces of information asserted on a JWT.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Claims {
    /// Identifies the expiration time on or after which the JWT must not be
    /// accepted for processing.
    pub exp: u64,
    /// Identifies the time at which the JWT was issued.
    pub iat: u64,
    /// Identifies the organization that issued the JWT.
    pub iss: String,
    /// User ID.
    pub sub: i32,
    /// User email.
    pub email: String,
}

/// Manage JWT tokens signed with a server-side secret.
#[derive(Clone)]
pub struct TokenManager {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl TokenManager {
    /// Create a new [`TokenManager`] instance.
    pub fn new(issuer: &str, secret: &str) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.to_owned(),
        }
    }

    /// Create a new [`jsonwebtoken`].
    pub fn create(&self, user_id: i32, email: &str) -> Result<String> {
        let time = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let header = Header::new(self.algorithm);
        let claims = Claims {
            exp: time + EXPIRATION_TIME,
            iat: time,
            iss: self.issuer.clone(),
            sub: user_id,
            email: email.to_owned(),
        };

        Ok(encode(&header, &claims, &self.encoding_key)?)
    }

    /// Decode and check a token.
    pub fn decode(&self, token: &str) -> Result<Claims> {
        let validation = Validation::new(self.algorithm);
        Ok(decode::<Claims>(token, &self.decoding_key, &validation)?.claims)
    }
}
