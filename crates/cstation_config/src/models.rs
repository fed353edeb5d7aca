// --- File: crates/cstation_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// --- Database Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String, // e.g. CSTATION__DATABASE__URL=sqlite://data/cstation.db
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

// --- Auth Config ---
// The signing key is a secret: set it to "secret_from_env" in a config file
// and provide CSTATION_SECRET_AUTH_SECRET_KEY (or AUTH_SECRET_KEY).
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthConfig {
    #[serde(default)]
    pub secret_key: Option<String>,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    /// Token lifetime in seconds. `None` issues tokens without an `exp` claim.
    #[serde(default)]
    pub token_ttl_secs: Option<i64>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: None,
            bcrypt_cost: default_bcrypt_cost(),
            token_ttl_secs: None,
        }
    }
}

// --- Open Charge Map Config ---
// API key loaded via CSTATION_SECRET_OPEN_CHARGE_MAP_API_KEY or OPEN_CHARGE_MAP_API_KEY
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OpenChargeMapConfig {
    #[serde(default = "default_ocm_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_max_results")]
    pub default_max_results: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OpenChargeMapConfig {
    fn default() -> Self {
        Self {
            base_url: default_ocm_base_url(),
            api_key: None,
            default_max_results: default_max_results(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub open_charge_map: OpenChargeMapConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_database_url() -> String {
    "sqlite://data/cstation.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_bcrypt_cost() -> u32 {
    12
}

fn default_ocm_base_url() -> String {
    "https://api.openchargemap.io/v3/poi/".to_string()
}

fn default_max_results() -> u32 {
    15
}

fn default_timeout_secs() -> u64 {
    30
}
