use cstation_common::CStationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Signature, format or expiry check failed
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// No identity, or the identity does not own the target
    #[error("{0}")]
    Unauthorized(String),

    #[error("Failed to create token: {0}")]
    TokenCreation(String),
}

impl From<AuthError> for CStationError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken(message) | AuthError::Unauthorized(message) => {
                CStationError::AuthError(message)
            }
            AuthError::TokenCreation(message) => CStationError::InternalError(message),
        }
    }
}
