use gateway_handlers::api::disconnect;
use gateway_handlers::clients::DynamoConnectionStore;
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
    let store = DynamoConnectionStore::from_env(config.table_name, config.connection_key).await;

    run(service_fn(|event| disconnect::function_handler(&store, event))).await
}
