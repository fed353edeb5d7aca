//! HTTP client for the Open Charge Map POI endpoint.

use crate::error::ChargerError;
use crate::models::SearchRequest;
use crate::ChargerLookup;
use async_trait::async_trait;
use cstation_common::create_client;
use cstation_config::OpenChargeMapConfig;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info};

/// Open Charge Map client.
#[derive(Debug, Clone)]
pub struct OpenChargeMapClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    default_max_results: u32,
}

impl OpenChargeMapClient {
    pub fn new(config: &OpenChargeMapConfig) -> Result<Self, ChargerError> {
        if config.base_url.is_empty() {
            return Err(ChargerError::ConfigError(
                "Open Charge Map base URL is empty".to_string(),
            ));
        }

        let http = create_client(config.timeout_secs, true)?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
            default_max_results: config.default_max_results,
        })
    }

    /// Query parameters in the form the POI endpoint expects.
    fn query_params(&self, request: &SearchRequest) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(5);
        if let Some(key) = &self.api_key {
            params.push(("key", key.clone()));
        }
        params.push(("latitude", request.lat.to_string()));
        params.push(("longitude", request.lng.to_string()));
        params.push((
            "maxresults",
            request
                .max_result
                .unwrap_or(self.default_max_results)
                .to_string(),
        ));
        if let Some(charger_type) = &request.charger_type {
            params.push(("connectiontypeid", charger_type.clone()));
        }
        params
    }
}

#[async_trait]
impl ChargerLookup for OpenChargeMapClient {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Value>, ChargerError> {
        debug!(
            "Searching chargers near ({}, {}), type {:?}",
            request.lat, request.lng, request.charger_type
        );

        let response = self
            .http
            .get(&self.base_url)
            .query(&self.query_params(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Charger API returned {}: {}", status, message);
            return Err(ChargerError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let results: Vec<Value> = response
            .json()
            .await
            .map_err(|e| ChargerError::ParseError(e.to_string()))?;

        info!("Charger API returned {} results", results.len());
        Ok(results)
    }
}
