/// Gateway handlers - sample Lambda functions for API Gateway and DynamoDB.
///
/// Each handler is its own Lambda binary and follows the same shape: read the
/// incoming API Gateway event, make one or two calls to a managed service,
/// answer with an API Gateway proxy response.
///
/// # Handlers
///
/// - `hello-api`: REST (OpenAPI) sample returning a fixed JSON greeting
/// - `ws-connect` / `ws-disconnect`: track WebSocket connections in DynamoDB
/// - `ws-send-message`: broadcast a message to every tracked connection,
///   pruning connections the gateway reports as gone
/// - `ws-heartbeat`: ping every other connection with a timestamp
///
/// External services sit behind [`clients::ConnectionStore`] and
/// [`clients::ConnectionPoster`].
///
/// # Example
///
/// ```no_run
/// use gateway_handlers::api::connect;
/// use gateway_handlers::clients::DynamoConnectionStore;
/// use gateway_handlers::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), lambda_runtime::Error> {
///     gateway_handlers::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let store = DynamoConnectionStore::from_env(config.table_name, config.connection_key).await;
///
///     lambda_runtime::run(lambda_runtime::service_fn(|event| {
///         connect::function_handler(&store, event)
///     }))
///     .await
/// }
/// ```
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod worker;

pub use errors::GatewayError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. The level defaults to `info` and can be overridden with `RUST_LOG`.
/// Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// gateway_handlers::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
