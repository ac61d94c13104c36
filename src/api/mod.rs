//! API Gateway route handlers: the REST sample and the WebSocket routes

pub mod connect;
pub mod disconnect;
pub mod hello;
pub mod helpers;
pub mod parsing;
pub mod send_message;
