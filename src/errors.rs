use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Failed to parse gateway event: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to access connection table: {0}")]
    StoreError(String),

    #[error("Failed to post to connection: {0}")]
    DeliveryError(String),

    #[error("Connection is gone: {0}")]
    GoneError(String),
}

impl GatewayError {
    /// Short, stable name of the failure kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GatewayError::ParseError(_) => "ParseError",
            GatewayError::ConfigError(_) => "ConfigError",
            GatewayError::StoreError(_) => "StoreError",
            GatewayError::DeliveryError(_) => "DeliveryError",
            GatewayError::GoneError(_) => "GoneError",
        }
    }

    /// Serializable form used in failure response bodies.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({ "name": self.name(), "message": self.to_string() })
    }

    #[must_use]
    pub fn is_gone(&self) -> bool {
        matches!(self, GatewayError::GoneError(_))
    }
}

impl From<anyhow::Error> for GatewayError {
    fn from(error: anyhow::Error) -> Self {
        GatewayError::ConfigError(format!("{error:#}"))
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(error: serde_json::Error) -> Self {
        GatewayError::ParseError(error.to_string())
    }
}
