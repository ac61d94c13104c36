use serde_json::Value;

use crate::core::models::BroadcastMessage;
use crate::errors::GatewayError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Connection id the gateway assigned to the caller, if any.
pub fn connection_id(payload: &Value) -> Option<&str> {
    v_str(payload, &["requestContext", "connectionId"]).filter(|id| !id.is_empty())
}

/// Connection id, required.
///
/// # Errors
///
/// Returns `ParseError` if the event carries no `requestContext.connectionId`.
pub fn require_connection_id(payload: &Value) -> Result<&str, GatewayError> {
    connection_id(payload)
        .ok_or_else(|| GatewayError::ParseError("Missing requestContext.connectionId".to_string()))
}

/// Domain name and stage the event arrived on.
///
/// # Errors
///
/// Returns `ParseError` if either field is absent or empty.
pub fn domain_and_stage(payload: &Value) -> Result<(&str, &str), GatewayError> {
    let domain = v_str(payload, &["requestContext", "domainName"])
        .filter(|d| !d.is_empty())
        .ok_or_else(|| GatewayError::ParseError("Missing requestContext.domainName".to_string()))?;
    let stage = v_str(payload, &["requestContext", "stage"])
        .filter(|s| !s.is_empty())
        .ok_or_else(|| GatewayError::ParseError("Missing requestContext.stage".to_string()))?;
    Ok((domain, stage))
}

/// The `data` field of a send-message body.
///
/// # Errors
///
/// Returns `ParseError` if the body is missing, is not JSON, or has no
/// string `data` field.
pub fn broadcast_data(payload: &Value) -> Result<String, GatewayError> {
    let body = payload
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| GatewayError::ParseError("Missing body".to_string()))?;

    let message: BroadcastMessage = serde_json::from_str(body)
        .map_err(|e| GatewayError::ParseError(format!("Invalid message body: {e}")))?;

    Ok(message.data)
}
