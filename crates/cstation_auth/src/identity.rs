//! The caller's verified identity and the per-route guards.

use crate::error::AuthError;
use crate::tokens::Claims;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

/// A verified identity, attached to the request by the middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i64,
    pub username: String,
    pub is_admin: bool,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
            is_admin: claims.is_admin,
        }
    }
}

/// Extractor for whoever is calling: a verified identity or anonymous.
///
/// Extraction never fails; rejection happens in the guards so each route
/// picks its own rule.
#[derive(Debug, Clone, Default)]
pub struct Caller(pub Option<Identity>);

impl Caller {
    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.0.as_ref()
    }

    /// Any verified identity will do.
    pub fn require_logged_in(&self) -> Result<&Identity, AuthError> {
        self.0
            .as_ref()
            .ok_or_else(|| AuthError::Unauthorized("Must be logged in".to_string()))
    }

    /// The verified identity must be `username`.
    ///
    /// This only inspects the token. Callers confirm that the token's
    /// `user_id` still owns `username` before trusting the match.
    pub fn require_same_user(&self, username: &str) -> Result<&Identity, AuthError> {
        match self.0.as_ref() {
            Some(identity) if identity.username == username => Ok(identity),
            Some(_) => Err(AuthError::Unauthorized(
                "Not authorized for this user".to_string(),
            )),
            None => Err(AuthError::Unauthorized("Must be logged in".to_string())),
        }
    }
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<Identity>().cloned()))
    }
}
