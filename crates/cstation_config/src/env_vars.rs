//! Environment variable handling for the C-Station backend.
//!
//! Configuration values use `CSTATION__SECTION__KEY`, secrets use
//! `CSTATION_SECRET_SECTION_KEY` with a fallback to the shorter legacy
//! `SECTION_KEY` form.

use std::env;
use tracing::warn;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "CSTATION";

/// The prefix for secret environment variables
pub const SECRET_PREFIX: &str = "CSTATION_SECRET";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Marker placed in config files for values that must come from the environment
pub const SECRET_MARKER: &str = "secret_from_env";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// `"server.port"` becomes `"CSTATION__SERVER__PORT"`.
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to an environment variable name
///
/// `"auth.secret_key"` becomes `"CSTATION_SECRET_AUTH_SECRET_KEY"`.
pub fn secret_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', SECRET_SEPARATOR);
    format!("{}{}{}", SECRET_PREFIX, SECRET_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to its legacy environment variable name
///
/// `"open_charge_map.api_key"` becomes `"OPEN_CHARGE_MAP_API_KEY"`.
pub fn legacy_secret_path_to_env_var(path: &str) -> String {
    match path.split_once('.') {
        Some((service, key)) => {
            format!("{}_{}", service, key.replace('.', SECRET_SEPARATOR)).to_uppercase()
        }
        None => path.to_uppercase(),
    }
}

/// Get an environment variable for a configuration path
pub fn get_config_env_var(path: &str) -> Option<String> {
    env::var(config_path_to_env_var(path)).ok()
}

/// Get an environment variable for a secret path
///
/// Tries the prefixed name first, then the legacy name.
pub fn get_secret_env_var(path: &str) -> Option<String> {
    if let Ok(value) = env::var(secret_path_to_env_var(path)) {
        return Some(value);
    }

    env::var(legacy_secret_path_to_env_var(path)).ok()
}

/// Check if a path is a secret path
///
/// Paths containing "secret", "key", "password" or "token" are considered secret.
pub fn is_secret_path(path: &str) -> bool {
    let path_lower = path.to_lowercase();
    let field = path_lower.rsplit('.').next().unwrap_or_default();
    field.contains("secret")
        || field.contains("key")
        || field.contains("password")
        || field == "token"
        || field.ends_with("_token")
}

/// Get an environment variable for a path, secret or not
pub fn get_env_var(path: &str) -> Option<String> {
    if is_secret_path(path) {
        get_secret_env_var(path)
    } else {
        get_config_env_var(path)
    }
}

/// Inject environment variables into a JSON value
///
/// Recursively replaces every `"secret_from_env"` string with the value of the
/// matching environment variable. Markers without a variable become `null`.
///
/// Returns `true` if any value was replaced.
pub fn inject_env_vars(value: &mut serde_json::Value) -> bool {
    use serde_json::Value;

    fn walk(path: &mut Vec<String>, obj: &mut Value) -> bool {
        let mut replaced = false;

        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    path.push(k.to_string());
                    replaced |= walk(path, v);
                    path.pop();
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let path_str = path.join(".");
                match get_env_var(&path_str) {
                    Some(env_val) => {
                        *obj = Value::String(env_val);
                        replaced = true;
                    }
                    None => {
                        warn!("env var for {} not found", path_str);
                        *obj = Value::Null;
                    }
                }
            }
            _ => {}
        }

        replaced
    }

    walk(&mut Vec::new(), value)
}
