//! Identity Token Service
//!
//! HS256 JWTs carrying the user's id, username and admin flag. Tokens only
//! expire when a TTL is configured.

use crate::error::AuthError;
use chrono::Utc;
use cstation_common::models::User;
use cstation_config::AuthConfig;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Signing key used when no secret is configured. Development only.
pub const DEV_SECRET_KEY: &str = "secret-dev";

/// Claims carried by every token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Surrogate id of the account the token was issued for.
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Issues and verifies identity tokens with a process-wide secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: Option<i64>,
}

impl TokenService {
    pub fn new(secret: &str, ttl_secs: Option<i64>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is optional; it is still checked whenever present.
        validation.set_required_spec_claims::<&str>(&[]);
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
        }
    }

    /// Builds the service from config, falling back to [`DEV_SECRET_KEY`].
    pub fn from_config(config: &AuthConfig) -> Self {
        let secret = match config.secret_key.as_deref() {
            Some(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("No auth secret configured, signing tokens with the development key");
                DEV_SECRET_KEY
            }
        };
        Self::new(secret, config.token_ttl_secs)
    }

    /// Signs a token for `user`.
    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            user_id: user.id,
            username: user.username.clone(),
            is_admin: user.is_admin,
            iat,
            exp: self.ttl_secs.map(|ttl| iat + ttl),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    /// Checks the signature (and expiry, when present) and returns the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}
