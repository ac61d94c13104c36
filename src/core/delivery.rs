//! Single-connection delivery with stale-record cleanup.

use tracing::{error, info};

use super::models::DeliveryOutcome;
use crate::clients::{ConnectionPoster, ConnectionStore};

/// Posts `data` to `connection_id`.
///
/// A connection reported gone has its record removed from `store`; that case
/// is a cleanup, not a failure. Every other error is returned in the outcome
/// for the caller to decide on.
pub async fn deliver(
    store: &dyn ConnectionStore,
    poster: &dyn ConnectionPoster,
    connection_id: &str,
    data: &[u8],
) -> DeliveryOutcome {
    match poster.post(connection_id, data).await {
        Ok(()) => DeliveryOutcome::Delivered,
        Err(e) if e.is_gone() => {
            info!(connection_id, "Found stale connection, deleting");
            match store.delete(connection_id).await {
                Ok(()) => DeliveryOutcome::Stale,
                Err(e) => {
                    error!(connection_id, "Couldn't remove stale connection: {}", e);
                    DeliveryOutcome::StaleNotRemoved(e)
                }
            }
        }
        Err(e) => {
            error!(connection_id, "Couldn't post to connection: {}", e);
            DeliveryOutcome::Failed(e)
        }
    }
}
