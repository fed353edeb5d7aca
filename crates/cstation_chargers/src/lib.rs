//! Charger Lookup Proxy
//!
//! Forwards a location search to Open Charge Map and returns the raw
//! results unmodified. [`ChargerLookup`] is the seam handlers depend on so
//! tests can substitute a fake.

use async_trait::async_trait;

pub mod client;
pub mod error;
pub mod models;

pub use client::OpenChargeMapClient;
pub use error::ChargerError;
pub use models::SearchRequest;

/// A remote lookup of chargers near a location.
#[async_trait]
pub trait ChargerLookup: Send + Sync {
    /// Returns the upstream candidates as-is.
    async fn search(&self, request: &SearchRequest)
        -> Result<Vec<serde_json::Value>, ChargerError>;
}
