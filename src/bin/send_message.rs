use aws_sdk_dynamodb::Client as DynamoClient;
use gateway_handlers::api::send_message;
use gateway_handlers::clients::{ApiGatewayPoster, DynamoConnectionStore};
use gateway_handlers::core::config::AppConfig;
use lambda_runtime::{Error, run, service_fn};
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    gateway_handlers::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // The management endpoint depends on the stage of each event, so only the
    // shared AWS config is loaded up front.
    let shared_config = aws_config::from_env().load().await;
    let store = DynamoConnectionStore::new(
        DynamoClient::new(&shared_config),
        config.table_name,
        config.connection_key,
    );

    run(service_fn(|event| {
        send_message::function_handler(
            &store,
            |endpoint: &str| ApiGatewayPoster::new(&shared_config, endpoint),
            event,
        )
    }))
    .await
}
