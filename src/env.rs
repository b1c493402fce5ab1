//! Fns to read variables from the environment more conveniently, and the config the binaries run
//! with.

use std::env;

use lazy_static::lazy_static;
use tracing::debug;

pub const DEFAULT_SNAPSHOT_PATH: &str = "fixtures/validator-mock.json";
pub const DEFAULT_PORT: &str = "3002";

lazy_static! {
    pub static ref ENV_CONFIG: EnvConfig = get_env_config();
}

/// Get an environment variable, encoding found or missing as Option, and panic otherwise.
pub fn get_env_var(key: &str) -> Option<String> {
    let var = match env::var(key) {
        Err(env::VarError::NotPresent) => None,
        Err(e) => panic!("{e}"),
        Ok(var) => Some(var),
    };

    if let Some(ref existing_var) = var {
        debug!("env var {key}: {existing_var}");
    } else {
        debug!("env var {key} requested but not found")
    };

    var
}

pub fn get_env_bool(key: &str) -> Option<bool> {
    get_env_var(key).map(|var| match var.to_lowercase().as_str() {
        "true" => true,
        "false" => false,
        "t" => true,
        "f" => false,
        "1" => true,
        "0" => false,
        str => panic!("invalid bool value {str} for {key}"),
    })
}

pub struct EnvConfig {
    pub bind_public_interface: bool,
    pub log_json: bool,
    pub log_perf: bool,
    pub port: String,
    pub snapshot_path: String,
}

pub fn get_env_config() -> EnvConfig {
    EnvConfig {
        bind_public_interface: get_env_bool("BIND_PUBLIC_INTERFACE").unwrap_or(true),
        log_json: get_env_bool("LOG_JSON").unwrap_or(false),
        log_perf: get_env_bool("LOG_PERF").unwrap_or(false),
        port: get_env_var("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string()),
        snapshot_path: get_env_var("SNAPSHOT_PATH")
            .unwrap_or_else(|| DEFAULT_SNAPSHOT_PATH.to_string()),
    }
}

impl EnvConfig {
    pub fn bind_address(&self) -> String {
        let host = if self.bind_public_interface {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };
        format!("{host}:{}", self.port)
    }
}
