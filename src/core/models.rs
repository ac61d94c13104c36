use serde::{Deserialize, Serialize};

use crate::errors::GatewayError;

/// Body of a send-message route event, e.g. `{"action":"sendmessage","data":"hi"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastMessage {
    pub data: String,
}

#[derive(Debug)]
pub enum DeliveryOutcome {
    Delivered,
    /// The connection that triggered the broadcast.
    Skipped,
    /// Connection was gone and its record was removed.
    Stale,
    /// Connection was gone but removing the record failed.
    StaleNotRemoved(GatewayError),
    Failed(GatewayError),
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct BroadcastReport {
    pub delivered: usize,
    pub skipped: usize,
    pub stale_removed: usize,
    pub failed: usize,
}

impl BroadcastReport {
    pub fn record(&mut self, outcome: &DeliveryOutcome) {
        match outcome {
            DeliveryOutcome::Delivered => self.delivered += 1,
            DeliveryOutcome::Skipped => self.skipped += 1,
            DeliveryOutcome::Stale => self.stale_removed += 1,
            DeliveryOutcome::StaleNotRemoved(_) | DeliveryOutcome::Failed(_) => self.failed += 1,
        }
    }
}

impl DeliveryOutcome {
    /// The error carried by a failed delivery, if any.
    #[must_use]
    pub fn into_error(self) -> Option<GatewayError> {
        match self {
            DeliveryOutcome::StaleNotRemoved(e) | DeliveryOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

impl<'a> FromIterator<&'a DeliveryOutcome> for BroadcastReport {
    fn from_iter<I: IntoIterator<Item = &'a DeliveryOutcome>>(iter: I) -> Self {
        let mut report = BroadcastReport::default();
        for outcome in iter {
            report.record(outcome);
        }
        report
    }
}
