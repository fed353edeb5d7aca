// --- File: crates/cstation_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The outward error type for every C-Station operation.
///
/// Each crate converts its own error type into this one with
/// `From<SpecificError> for CStationError`, so handlers can use `?` and let
/// the response rendering in [`crate::http`] pick the status code.
#[derive(Error, Debug)]
pub enum CStationError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Missing, invalid or mismatched identity
    #[error("Unauthorized: {0}")]
    AuthError(String),

    /// Request payload failed validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Unexpected storage failure
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// The external charger lookup (or another upstream) failed
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Registration or rename hit an existing username
    #[error("Duplicate username: {0}")]
    DuplicateUsername(String),

    /// Any other uniqueness violation
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Target row absent
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for CStationError {
    fn status_code(&self) -> u16 {
        match self {
            CStationError::ParseError(_) => 400,
            CStationError::ConfigError(_) => 500,
            CStationError::AuthError(_) => 401,
            CStationError::ValidationError(_) => 400,
            CStationError::DatabaseError(_) => 500,
            CStationError::ExternalServiceError { .. } => 502,
            CStationError::DuplicateUsername(_) => 400,
            CStationError::ConflictError(_) => 409,
            CStationError::NotFoundError(_) => 404,
            CStationError::InternalError(_) => 500,
        }
    }
}

impl CStationError {
    /// Whether the error is an internal failure whose details must not reach clients.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            CStationError::ConfigError(_)
                | CStationError::DatabaseError(_)
                | CStationError::InternalError(_)
        )
    }
}

impl From<reqwest::Error> for CStationError {
    fn from(err: reqwest::Error) -> Self {
        external_service_error("HTTP", err)
    }
}

impl From<serde_json::Error> for CStationError {
    fn from(err: serde_json::Error) -> Self {
        CStationError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for CStationError {
    fn from(err: std::io::Error) -> Self {
        CStationError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> CStationError {
    CStationError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> CStationError {
    CStationError::NotFoundError(message.to_string())
}

pub fn unauthorized<T: fmt::Display>(message: T) -> CStationError {
    CStationError::AuthError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> CStationError {
    CStationError::ConflictError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> CStationError {
    CStationError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> CStationError {
    CStationError::InternalError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_outcome_class_has_a_distinct_status() {
        assert_eq!(not_found("x").status_code(), 404);
        assert_eq!(unauthorized("x").status_code(), 401);
        assert_eq!(validation_error("x").status_code(), 400);
        assert_eq!(conflict("x").status_code(), 409);
        assert_eq!(external_service_error("OCM", "down").status_code(), 502);
        assert_eq!(internal_error("x").status_code(), 500);
        assert_eq!(
            CStationError::DuplicateUsername("u1".to_string()).status_code(),
            400
        );
    }

    #[test]
    fn only_storage_and_internal_failures_are_internal() {
        assert!(internal_error("boom").is_internal());
        assert!(CStationError::DatabaseError("locked".to_string()).is_internal());
        assert!(!not_found("x").is_internal());
        assert!(!external_service_error("OCM", "down").is_internal());
    }
}
