use std::env;
use std::fs;

use anyhow::Context;

use crate::errors::GatewayError;

pub const DEFAULT_CONNECTION_KEY: &str = "connectionId";
pub const DEFAULT_HEARTBEAT_TABLE: &str = "aws-ws-connections";
pub const DEFAULT_HEARTBEAT_KEY: &str = "connection_id";
pub const DEFAULT_API_URL_FILE: &str = "./api_url";

/// Connection table settings for the `$connect`, `$disconnect` and
/// send-message handlers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub table_name: String,
    pub connection_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(env_var)
    }

    /// Builds the config from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GatewayError> {
        Ok(Self {
            table_name: lookup("TABLE_NAME")
                .ok_or_else(|| GatewayError::ConfigError("TABLE_NAME: not set".to_string()))?,
            connection_key: lookup("CONNECTION_KEY")
                .unwrap_or_else(|| DEFAULT_CONNECTION_KEY.to_string()),
        })
    }
}

/// Settings for the heartbeat worker, which talks to a fixed management
/// endpoint instead of deriving it from the event.
#[derive(Debug, Clone)]
pub struct HeartbeatConfig {
    pub table_name: String,
    pub connection_key: String,
    pub api_url: String,
}

impl HeartbeatConfig {
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(env_var)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GatewayError> {
        let api_url = match lookup("API_URL") {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => {
                let path = lookup("API_URL_FILE")
                    .unwrap_or_else(|| DEFAULT_API_URL_FILE.to_string());
                read_api_url(&path)?
            }
        };

        Ok(Self {
            table_name: lookup("HEARTBEAT_TABLE")
                .unwrap_or_else(|| DEFAULT_HEARTBEAT_TABLE.to_string()),
            connection_key: lookup("HEARTBEAT_KEY")
                .unwrap_or_else(|| DEFAULT_HEARTBEAT_KEY.to_string()),
            api_url,
        })
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// Reads the management endpoint written next to the function at deploy time.
pub fn read_api_url(path: &str) -> anyhow::Result<String> {
    let raw = fs::read_to_string(path).with_context(|| format!("API_URL_FILE {path}"))?;
    let url = raw.trim();
    if url.is_empty() {
        anyhow::bail!("API_URL_FILE {path} is empty");
    }
    Ok(url.to_string())
}
