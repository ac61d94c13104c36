//! API Gateway Management API access, used to push data down open
//! WebSocket connections.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_apigatewaymanagement::Client as ManagementClient;
use aws_sdk_apigatewaymanagement::config::Builder as ManagementConfigBuilder;
use aws_sdk_apigatewaymanagement::config::http::HttpResponse;
use aws_sdk_apigatewaymanagement::error::{DisplayErrorContext, SdkError};
use aws_sdk_apigatewaymanagement::operation::post_to_connection::PostToConnectionError;
use aws_sdk_apigatewaymanagement::primitives::Blob;
use tracing::info;
use url::Url;

use crate::errors::GatewayError;

const GONE_STATUS: u16 = 410;

#[async_trait]
pub trait ConnectionPoster: Send + Sync {
    /// Sends `data` to one connection.
    ///
    /// # Errors
    ///
    /// Returns `GoneError` when the connection no longer exists and
    /// `DeliveryError` for any other failure.
    async fn post(&self, connection_id: &str, data: &[u8]) -> Result<(), GatewayError>;
}

#[derive(Debug, Clone)]
pub struct ApiGatewayPoster {
    client: ManagementClient,
    endpoint: String,
}

impl ApiGatewayPoster {
    /// # Errors
    ///
    /// Returns `ConfigError` if `endpoint` is not an absolute URL.
    pub fn new(shared_config: &SdkConfig, endpoint: &str) -> Result<Self, GatewayError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| GatewayError::ConfigError(format!("management endpoint {endpoint}: {e}")))?
            .to_string();
        let endpoint = endpoint.trim_end_matches('/').to_string();

        let config = ManagementConfigBuilder::from(shared_config)
            .endpoint_url(&endpoint)
            .build();

        Ok(Self {
            client: ManagementClient::from_conf(config),
            endpoint,
        })
    }
}

#[async_trait]
impl ConnectionPoster for ApiGatewayPoster {
    async fn post(&self, connection_id: &str, data: &[u8]) -> Result<(), GatewayError> {
        let resp = self
            .client
            .post_to_connection()
            .connection_id(connection_id)
            .data(Blob::new(data))
            .send()
            .await
            .map_err(|e| post_error(connection_id, &e))?;

        info!(connection_id, endpoint = %self.endpoint, response = ?resp, "Posted to connection");
        Ok(())
    }
}

/// Management endpoint for the stage an event arrived on.
#[must_use]
pub fn endpoint_for(domain_name: &str, stage: &str) -> String {
    format!("https://{domain_name}/{stage}")
}

fn post_error(
    connection_id: &str,
    error: &SdkError<PostToConnectionError, HttpResponse>,
) -> GatewayError {
    let gone = error
        .as_service_error()
        .is_some_and(PostToConnectionError::is_gone_exception)
        || error
            .raw_response()
            .is_some_and(|raw| raw.status().as_u16() == GONE_STATUS);

    if gone {
        GatewayError::GoneError(connection_id.to_string())
    } else {
        GatewayError::DeliveryError(format!("{connection_id}: {}", DisplayErrorContext(error)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_apigatewaymanagement::error::ErrorMetadata;
    use aws_sdk_apigatewaymanagement::types::error::{GoneException, LimitExceededException};
    use aws_smithy_runtime_api::http::StatusCode;
    use aws_smithy_types::body::SdkBody;

    fn raw(status: u16) -> HttpResponse {
        HttpResponse::new(StatusCode::try_from(status).unwrap(), SdkBody::empty())
    }

    #[test]
    fn test_gone_exception_is_gone() {
        let err = SdkError::service_error(
            PostToConnectionError::GoneException(
                GoneException::builder().message("connection closed").build(),
            ),
            raw(410),
        );

        let mapped = post_error("abc=", &err);
        assert!(matches!(mapped, GatewayError::GoneError(ref id) if id == "abc="));
    }

    #[test]
    fn test_raw_410_without_modeled_error_is_gone() {
        let err = SdkError::service_error(
            PostToConnectionError::generic(ErrorMetadata::builder().code("Unknown").build()),
            raw(410),
        );

        assert!(post_error("abc=", &err).is_gone());
    }

    #[test]
    fn test_throttling_is_a_delivery_error() {
        let err = SdkError::service_error(
            PostToConnectionError::LimitExceededException(
                LimitExceededException::builder().message("slow down").build(),
            ),
            raw(429),
        );

        match post_error("abc=", &err) {
            GatewayError::DeliveryError(msg) => assert!(msg.starts_with("abc=: ")),
            other => panic!("Unexpected error type: {other:?}"),
        }
    }

    #[test]
    fn test_endpoint_for_stage() {
        assert_eq!(
            endpoint_for("abc.execute-api.us-east-1.amazonaws.com", "prod"),
            "https://abc.execute-api.us-east-1.amazonaws.com/prod"
        );
    }
}
