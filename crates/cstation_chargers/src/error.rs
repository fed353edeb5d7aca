use cstation_common::{external_service_error, CStationError};
use thiserror::Error;

/// Name reported for upstream failures.
pub const SERVICE_NAME: &str = "Open Charge Map";

#[derive(Debug, Error)]
pub enum ChargerError {
    #[error("Request to charger API failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Charger API returned {status_code}: {message}")]
    ApiError { status_code: u16, message: String },

    #[error("Failed to parse charger API response: {0}")]
    ParseError(String),

    #[error("Charger API configuration error: {0}")]
    ConfigError(String),
}

impl From<ChargerError> for CStationError {
    fn from(err: ChargerError) -> Self {
        match err {
            ChargerError::ConfigError(message) => CStationError::ConfigError(message),
            other => external_service_error(SERVICE_NAME, other),
        }
    }
}
