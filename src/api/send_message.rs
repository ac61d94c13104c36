//! Send-message route: broadcast the caller's `data` to every stored
//! connection through the management endpoint of the stage the event came in
//! on.

use futures::future::join_all;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::clients::management::endpoint_for;
use crate::clients::{ConnectionPoster, ConnectionStore};
use crate::core::delivery::deliver;
use crate::core::models::{BroadcastReport, DeliveryOutcome};
use crate::errors::GatewayError;

pub const DATA_SENT: &str = "Data sent.";

/// Lambda entry point. `poster_for` builds a poster for a management endpoint
/// URL.
///
/// # Errors
///
/// Propagates scan failures, delivery failures other than gone connections,
/// and failures to delete stale records.
#[tracing::instrument(level = "info", skip(store, poster_for, event))]
pub async fn function_handler<F, P>(
    store: &dyn ConnectionStore,
    poster_for: F,
    event: LambdaEvent<Value>,
) -> Result<Value, Error>
where
    F: Fn(&str) -> Result<P, GatewayError>,
    P: ConnectionPoster,
{
    handle_send_message(store, poster_for, &event.payload)
        .await
        .map_err(|e| {
            error!("Broadcast failed: {}", e);
            Error::from(e)
        })
}

/// # Errors
///
/// See [`function_handler`].
pub async fn handle_send_message<F, P>(
    store: &dyn ConnectionStore,
    poster_for: F,
    payload: &Value,
) -> Result<Value, GatewayError>
where
    F: Fn(&str) -> Result<P, GatewayError>,
    P: ConnectionPoster,
{
    let data = match parsing::broadcast_data(payload) {
        Ok(d) => d,
        Err(e) => {
            error!("Send-message event rejected: {}", e);
            return Ok(helpers::err_response(400, &e.to_string()));
        }
    };
    let (domain, stage) = match parsing::domain_and_stage(payload) {
        Ok(v) => v,
        Err(e) => {
            error!("Send-message event rejected: {}", e);
            return Ok(helpers::err_response(400, &e.to_string()));
        }
    };

    #[cfg(feature = "debug-logs")]
    info!("Broadcasting data: {}", data);

    #[cfg(not(feature = "debug-logs"))]
    info!("Broadcasting {} bytes of data", data.len());

    let connection_ids = store.list().await?;
    let poster = poster_for(&endpoint_for(domain, stage))?;

    let outcomes = join_all(
        connection_ids
            .iter()
            .map(|id| deliver(store, &poster, id, data.as_bytes())),
    )
    .await;

    let report: BroadcastReport = outcomes.iter().collect();
    info!(
        delivered = report.delivered,
        stale_removed = report.stale_removed,
        failed = report.failed,
        "Broadcast finished"
    );

    if let Some(e) = outcomes.into_iter().find_map(DeliveryOutcome::into_error) {
        return Err(e);
    }

    Ok(helpers::ok_text(DATA_SENT))
}
