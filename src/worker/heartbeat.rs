//! Heartbeat: ping every open connection except the caller and prune the
//! ones that are gone.
//!
//! Unlike the send-message route this worker never fails an invocation. Scan
//! errors leave it with nothing to ping; delivery and cleanup errors are
//! logged and counted.

use chrono::{DateTime, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use crate::api::parsing;
use crate::clients::{ConnectionPoster, ConnectionStore};
use crate::core::delivery::deliver;
use crate::core::models::{BroadcastReport, DeliveryOutcome};

#[tracing::instrument(level = "info", skip(store, poster, event))]
pub async fn function_handler(
    store: &dyn ConnectionStore,
    poster: &dyn ConnectionPoster,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let report = run_heartbeat(store, poster, &event.payload, Utc::now()).await;
    Ok(serde_json::to_value(report)?)
}

/// Ping text sent to each connection. Microseconds are printed only when
/// non-zero, e.g. `PING? 2024-03-01 12:30:05+00:00`.
#[must_use]
pub fn ping_message(now: DateTime<Utc>) -> String {
    let layout = if now.timestamp_subsec_micros() == 0 {
        "%Y-%m-%d %H:%M:%S%:z"
    } else {
        "%Y-%m-%d %H:%M:%S%.6f%:z"
    };
    format!("PING? {}", now.format(layout))
}

pub async fn run_heartbeat(
    store: &dyn ConnectionStore,
    poster: &dyn ConnectionPoster,
    payload: &Value,
    now: DateTime<Utc>,
) -> BroadcastReport {
    let sender = parsing::connection_id(payload);

    let connection_ids = match store.list().await {
        Ok(ids) => {
            info!("Found {} active connections.", ids.len());
            ids
        }
        Err(e) => {
            error!("Couldn't get connections: {}", e);
            Vec::new()
        }
    };

    let message = ping_message(now);
    info!("Message: {}", message);

    let mut report = BroadcastReport::default();
    for connection_id in &connection_ids {
        let outcome = if Some(connection_id.as_str()) == sender {
            DeliveryOutcome::Skipped
        } else {
            deliver(store, poster, connection_id, message.as_bytes()).await
        };
        report.record(&outcome);
    }

    info!(
        delivered = report.delivered,
        skipped = report.skipped,
        stale_removed = report.stale_removed,
        failed = report.failed,
        "Heartbeat finished"
    );
    report
}
