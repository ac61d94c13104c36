use gateway_handlers::api::hello;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    gateway_handlers::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(hello::handler)).await
}
