//! In-memory doubles for the connection table and the management API.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use gateway_handlers::GatewayError;
use gateway_handlers::clients::{ConnectionPoster, ConnectionStore};
use serde_json::{Value, json};

#[derive(Default)]
pub struct MemoryStore {
    ids: Mutex<Vec<String>>,
    fail_put: bool,
    fail_delete: bool,
    fail_list: bool,
}

impl MemoryStore {
    pub fn with_ids(ids: &[&str]) -> Self {
        Self {
            ids: Mutex::new(ids.iter().map(|s| (*s).to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn failing_put() -> Self {
        Self {
            fail_put: true,
            ..Self::default()
        }
    }

    pub fn failing_delete(ids: &[&str]) -> Self {
        Self {
            fail_delete: true,
            ..Self::with_ids(ids)
        }
    }

    pub fn failing_list() -> Self {
        Self {
            fail_list: true,
            ..Self::default()
        }
    }

    pub fn ids(&self) -> Vec<String> {
        self.ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConnectionStore for MemoryStore {
    async fn put(&self, connection_id: &str) -> Result<(), GatewayError> {
        if self.fail_put {
            return Err(GatewayError::StoreError(
                "put_item ResourceNotFoundException: table missing".to_string(),
            ));
        }
        self.ids.lock().unwrap().push(connection_id.to_string());
        Ok(())
    }

    async fn delete(&self, connection_id: &str) -> Result<(), GatewayError> {
        if self.fail_delete {
            return Err(GatewayError::StoreError(
                "delete_item ProvisionedThroughputExceededException: slow down".to_string(),
            ));
        }
        self.ids.lock().unwrap().retain(|id| id != connection_id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>, GatewayError> {
        if self.fail_list {
            return Err(GatewayError::StoreError("scan AccessDeniedException: denied".to_string()));
        }
        Ok(self.ids())
    }
}

/// Poster that succeeds unless a connection is marked gone or broken.
#[derive(Default)]
pub struct ScriptedPoster {
    gone: HashSet<String>,
    broken: HashSet<String>,
    sent: Mutex<HashMap<String, Vec<u8>>>,
}

impl ScriptedPoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gone(mut self, id: &str) -> Self {
        self.gone.insert(id.to_string());
        self
    }

    pub fn broken(mut self, id: &str) -> Self {
        self.broken.insert(id.to_string());
        self
    }

    pub fn sent_to(&self, id: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .get(id)
            .map(|data| String::from_utf8_lossy(data).into_owned())
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl ConnectionPoster for ScriptedPoster {
    async fn post(&self, connection_id: &str, data: &[u8]) -> Result<(), GatewayError> {
        if self.gone.contains(connection_id) {
            return Err(GatewayError::GoneError(connection_id.to_string()));
        }
        if self.broken.contains(connection_id) {
            return Err(GatewayError::DeliveryError(format!(
                "{connection_id}: LimitExceededException"
            )));
        }
        self.sent
            .lock()
            .unwrap()
            .insert(connection_id.to_string(), data.to_vec());
        Ok(())
    }
}

#[async_trait]
impl<'a> ConnectionPoster for &'a ScriptedPoster {
    async fn post(&self, connection_id: &str, data: &[u8]) -> Result<(), GatewayError> {
        (**self).post(connection_id, data).await
    }
}

pub fn ws_event(connection_id: &str) -> Value {
    json!({
        "requestContext": {
            "connectionId": connection_id,
            "domainName": "abc123.execute-api.us-east-1.amazonaws.com",
            "stage": "prod",
            "routeKey": "$connect",
            "eventType": "CONNECT"
        },
        "isBase64Encoded": false
    })
}

pub fn send_message_event(connection_id: &str, data: &str) -> Value {
    let mut event = ws_event(connection_id);
    event["requestContext"]["routeKey"] = json!("sendmessage");
    event["requestContext"]["eventType"] = json!("MESSAGE");
    event["body"] = json!(json!({ "action": "sendmessage", "data": data }).to_string());
    event
}
