use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Search parameters accepted by `POST /station/newSearch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SearchRequest {
    pub lat: f64,
    pub lng: f64,
    /// Falls back to the configured default (15) when absent.
    #[serde(rename = "maxResult", default)]
    pub max_result: Option<u32>,
    /// Open Charge Map connection type id, as a string or a number.
    #[serde(default, deserialize_with = "string_or_number")]
    pub charger_type: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(i64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        StringOrNumber::Text(text) if text.trim().is_empty() => None,
        StringOrNumber::Text(text) => Some(text),
        StringOrNumber::Number(number) => Some(number.to_string()),
    }))
}
