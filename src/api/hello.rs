//! REST API sample handler backing the OpenAPI-defined `GET /hello` route.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::info;

use super::helpers;

pub use self::function_handler as handler;

/// Logs the incoming request and answers with a fixed JSON greeting.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(handle_hello(&event.payload))
}

#[must_use]
pub fn handle_hello(payload: &Value) -> Value {
    info!("Hello API received request: {:?}", payload);

    helpers::json_response(200, &json!({ "message": "hello world" }))
}
