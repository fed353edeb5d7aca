//! Configuration for the C-Station backend.
//!
//! Values are layered: built-in defaults, `config/default.*`,
//! `config/{RUN_ENV}.*`, then `CSTATION__SECTION__KEY` environment variables.
//! Secrets marked `"secret_from_env"` are resolved last.

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use tracing::debug;

pub mod env_vars;
pub mod models;

pub use models::*;

/// Loads the application configuration from files and the environment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("CSTATION_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);
    debug!(
        "Loading configuration from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(&env_vars::get_config_prefix())
                .separator(env_vars::CONFIG_SEPARATOR)
                .try_parsing(true),
        );

    let raw: serde_json::Value = builder.build()?.try_deserialize()?;
    finish_config(raw)
}

/// Parses configuration from an in-memory TOML document.
///
/// Used by tests and tools that do not read the config directory.
pub fn load_config_from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
    let raw: serde_json::Value = Config::builder()
        .add_source(File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize()?;
    finish_config(raw)
}

fn finish_config(mut raw: serde_json::Value) -> Result<AppConfig, ConfigError> {
    env_vars::inject_env_vars(&mut raw);

    let mut config: AppConfig = serde_json::from_value(raw)
        .map_err(|err| ConfigError::Message(format!("failed to parse config: {err}")))?;
    apply_secret_fallbacks(&mut config);
    Ok(config)
}

/// Fills secrets that were not set in any file from their env vars.
fn apply_secret_fallbacks(config: &mut AppConfig) {
    if config.auth.secret_key.is_none() {
        config.auth.secret_key = env_vars::get_secret_env_var("auth.secret_key");
    }
    if config.open_charge_map.api_key.is_none() {
        config.open_charge_map.api_key = env_vars::get_secret_env_var("open_charge_map.api_key");
    }
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The path is taken from `DOTENV_OVERRIDE`, then from a first CLI argument
/// starting with `.env`, and defaults to `.env`. Loading happens once per
/// process; the resolved path is returned.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
