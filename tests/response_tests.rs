use gateway_handlers::api::hello::handle_hello;
use gateway_handlers::api::helpers::{err_response, ok_text};
use serde_json::{Value, json};

#[test]
fn test_hello_body_is_pretty_printed() {
    let resp = handle_hello(&json!({ "path": "/hello" }));

    assert_eq!(resp["statusCode"], 200);
    assert_eq!(
        resp["body"].as_str().unwrap(),
        "{\n  \"message\": \"hello world\"\n}"
    );
}

#[test]
fn test_hello_has_json_content_type() {
    let resp = handle_hello(&Value::Null);
    assert_eq!(resp["headers"]["Content-Type"], "application/json");
}

#[test]
fn test_ok_text_is_plain() {
    let resp = ok_text("Connected.");
    assert_eq!(resp, json!({ "statusCode": 200, "body": "Connected." }));
    assert!(resp.get("headers").is_none());
}

#[test]
fn test_err_response_body_is_json() {
    let resp = err_response(400, "Missing body");
    let body: Value = serde_json::from_str(resp["body"].as_str().unwrap()).unwrap();
    assert_eq!(body, json!({ "error": "Missing body" }));
}
