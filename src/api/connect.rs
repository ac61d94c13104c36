//! `$connect` route: remember the new connection.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::clients::ConnectionStore;

pub const CONNECTED: &str = "Connected.";
pub const CONNECT_FAILED_PREFIX: &str = "Failed to connect: ";

/// Lambda entry point for the `$connect` route.
#[tracing::instrument(level = "info", skip(store, event))]
pub async fn function_handler(
    store: &dyn ConnectionStore,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handle_connect(store, &event.payload).await)
}

/// Stores the caller's connection id.
///
/// Answers 200 `Connected.` on success and 500 with the store error as JSON
/// otherwise.
pub async fn handle_connect(store: &dyn ConnectionStore, payload: &Value) -> Value {
    let connection_id = match parsing::require_connection_id(payload) {
        Ok(id) => id,
        Err(e) => {
            error!("Connect event rejected: {}", e);
            return helpers::err_response(400, &e.to_string());
        }
    };

    match store.put(connection_id).await {
        Ok(()) => {
            info!(connection_id, "Connection registered");
            helpers::ok_text(CONNECTED)
        }
        Err(e) => {
            error!(connection_id, "Failed to register connection: {}", e);
            helpers::failure_response(CONNECT_FAILED_PREFIX, &e)
        }
    }
}
