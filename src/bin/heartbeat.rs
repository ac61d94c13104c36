use aws_sdk_dynamodb::Client as DynamoClient;
use gateway_handlers::clients::{ApiGatewayPoster, DynamoConnectionStore};
use gateway_handlers::core::config::HeartbeatConfig;
use gateway_handlers::worker::heartbeat;
use lambda_runtime::{Error, run, service_fn};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    gateway_handlers::setup_logging();

    let config = HeartbeatConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!(api_url = %config.api_url, table = %config.table_name, "Heartbeat configured");

    let shared_config = aws_config::from_env().load().await;
    let store = DynamoConnectionStore::new(
        DynamoClient::new(&shared_config),
        config.table_name,
        config.connection_key,
    );
    let poster = ApiGatewayPoster::new(&shared_config, &config.api_url)?;

    run(service_fn(|event| heartbeat::function_handler(&store, &poster, event))).await
}
