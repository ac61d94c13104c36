//! Connection table access.
//!
//! Handlers depend on the [`ConnectionStore`] trait; [`DynamoConnectionStore`]
//! is the production implementation backed by a DynamoDB table keyed by a
//! single string attribute.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{info, warn};

use crate::errors::GatewayError;

#[async_trait]
pub trait ConnectionStore: Send + Sync {
    /// # Errors
    ///
    /// Returns `StoreError` if the record cannot be written.
    async fn put(&self, connection_id: &str) -> Result<(), GatewayError>;

    /// # Errors
    ///
    /// Returns `StoreError` if the record cannot be removed.
    async fn delete(&self, connection_id: &str) -> Result<(), GatewayError>;

    /// Every stored connection id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the table cannot be scanned.
    async fn list(&self) -> Result<Vec<String>, GatewayError>;
}

#[derive(Debug, Clone)]
pub struct DynamoConnectionStore {
    client: DynamoClient,
    table_name: String,
    key: String,
}

impl DynamoConnectionStore {
    pub fn new(client: DynamoClient, table_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            key: key.into(),
        }
    }

    /// Builds a store from the ambient AWS configuration (region, credentials).
    pub async fn from_env(table_name: impl Into<String>, key: impl Into<String>) -> Self {
        let shared_config = aws_config::from_env().load().await;
        Self::new(DynamoClient::new(&shared_config), table_name, key)
    }
}

#[async_trait]
impl ConnectionStore for DynamoConnectionStore {
    async fn put(&self, connection_id: &str) -> Result<(), GatewayError> {
        let resp = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .item(&self.key, AttributeValue::S(connection_id.to_string()))
            .send()
            .await
            .map_err(|e| store_error("put_item", &e))?;

        info!(table = %self.table_name, connection_id, response = ?resp, "Stored connection");
        Ok(())
    }

    async fn delete(&self, connection_id: &str) -> Result<(), GatewayError> {
        let resp = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key(&self.key, AttributeValue::S(connection_id.to_string()))
            .send()
            .await
            .map_err(|e| store_error("delete_item", &e))?;

        info!(table = %self.table_name, connection_id, response = ?resp, "Removed connection");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>, GatewayError> {
        let mut items = self
            .client
            .scan()
            .table_name(&self.table_name)
            .projection_expression("#k")
            .expression_attribute_names("#k", &self.key)
            .into_paginator()
            .items()
            .send();

        let mut ids = Vec::new();
        while let Some(item) = items
            .try_next()
            .await
            .map_err(|e| store_error("scan", &e))?
        {
            match item.get(&self.key).map(AttributeValue::as_s) {
                Some(Ok(id)) => ids.push(id.clone()),
                _ => warn!(table = %self.table_name, "Skipping item without a string key"),
            }
        }

        info!(table = %self.table_name, count = ids.len(), "Scanned connections");
        Ok(ids)
    }
}

fn store_error<E, R>(operation: &str, error: &SdkError<E, R>) -> GatewayError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let code = error.code().unwrap_or("Unknown");
    GatewayError::StoreError(format!(
        "{operation} {code}: {}",
        DisplayErrorContext(error)
    ))
}
