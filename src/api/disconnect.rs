//! `$disconnect` route: forget a closed connection.
//!
//! The gateway delivers `$disconnect` on a best-effort basis, so records can
//! outlive their connection; broadcasts clean those up when they find them.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::clients::ConnectionStore;

pub const DISCONNECTED: &str = "Disconnected.";
pub const DISCONNECT_FAILED_PREFIX: &str = "Failed to disconnect: ";

#[tracing::instrument(level = "info", skip(store, event))]
pub async fn function_handler(
    store: &dyn ConnectionStore,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle_disconnect(store, &event.payload).await)
}

pub async fn handle_disconnect(store: &dyn ConnectionStore, payload: &Value) -> Value {
    let connection_id = match parsing::require_connection_id(payload) {
        Ok(id) => id,
        Err(e) => {
            error!("Disconnect event rejected: {}", e);
            return helpers::err_response(400, &e.to_string());
        }
    };

    match store.delete(connection_id).await {
        Ok(()) => {
            info!(connection_id, "Connection removed");
            helpers::ok_text(DISCONNECTED)
        }
        Err(e) => {
            error!(connection_id, "Failed to remove connection: {}", e);
            helpers::failure_response(DISCONNECT_FAILED_PREFIX, &e)
        }
    }
}
