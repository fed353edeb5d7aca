// --- File: crates/cstation_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Data structures and models

// Re-export error types and utilities for easier access
pub use error::{
    conflict, external_service_error, internal_error, not_found, unauthorized, validation_error,
    CStationError, HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::{client::create_client, IntoHttpResponse, INTERNAL_ERROR_MESSAGE};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_error, log_result};
