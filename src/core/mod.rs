//! Configuration, data types and delivery logic shared by every handler

pub mod config;
pub mod delivery;
pub mod models;
