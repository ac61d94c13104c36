//! Scheduled and out-of-band workers

pub mod heartbeat;
