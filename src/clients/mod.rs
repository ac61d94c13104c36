//! Client modules for the managed services the handlers call

pub mod connection_store;
pub mod management;

pub use connection_store::{ConnectionStore, DynamoConnectionStore};
pub use management::{ApiGatewayPoster, ConnectionPoster};
