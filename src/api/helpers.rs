//! Response builders shared by the gateway handlers.
//!
//! Every handler answers with an API Gateway proxy response:
//! `statusCode`, an optional `headers` map and a string `body`.

use serde_json::{Value, json};

use crate::errors::GatewayError;

// ============================================================================
// Response Builders
// ============================================================================

/// Returns a 200 OK response with a plain-text body.
#[must_use]
pub fn ok_text(body: &str) -> Value {
    json!({ "statusCode": 200, "body": body })
}

/// Returns a JSON response whose body is pretty-printed with two-space indent.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    let body = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body
    })
}

/// Returns a 500 response whose body is `prefix` followed by the error as JSON.
#[must_use]
pub fn failure_response(prefix: &str, error: &GatewayError) -> Value {
    json!({
        "statusCode": 500,
        "body": format!("{prefix}{}", error.to_json())
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_response_pretty_prints_body() {
        let v = json_response(200, &json!({ "message": "hello world" }));
        assert_eq!(v["statusCode"], 200);
        assert_eq!(v["headers"]["Content-Type"], "application/json");
        assert_eq!(v["body"], "{\n  \"message\": \"hello world\"\n}");
    }

    #[test]
    fn test_failure_response_embeds_error_json() {
        let err = GatewayError::StoreError("put_item ResourceNotFoundException".to_string());
        let v = failure_response("Failed to connect: ", &err);

        assert_eq!(v["statusCode"], 500);
        let body = v["body"].as_str().unwrap();
        let json_part = body.strip_prefix("Failed to connect: ").unwrap();
        let parsed: Value = serde_json::from_str(json_part).unwrap();
        assert_eq!(parsed["name"], "StoreError");
        assert!(
            parsed["message"]
                .as_str()
                .unwrap()
                .contains("ResourceNotFoundException")
        );
    }

    #[test]
    fn test_err_response_wraps_message() {
        let v = err_response(400, "Missing connectionId");
        assert_eq!(v["statusCode"], 400);
        assert_eq!(v["body"], "{\"error\":\"Missing connectionId\"}");
    }
}
