//! Best-effort delivery of events to the ingestion API.
//!
//! One POST per event with a bounded timeout, no retry and no queue: a
//! failed emission is a dropped event. The detection loop logs failures
//! and keeps running regardless of downstream availability.

use std::time::Duration;

use thiserror::Error;

use crate::event::BehaviorEvent;

#[derive(Debug, Error)]
pub enum EmissionError {
    #[error("ingestion API returned status {0}")]
    Status(u16),
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Delivery seam for finalized events; production uses HTTP, tests record.
pub trait EventEmitter: Send + Sync {
    fn emit(&self, event: &BehaviorEvent) -> Result<(), EmissionError>;
}

/// POSTs each event as JSON to the configured endpoint. The call blocks,
/// so the loop drives it through `spawn_blocking`.
pub struct HttpEventEmitter {
    endpoint: String,
    timeout: Duration,
}

impl HttpEventEmitter {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

impl EventEmitter for HttpEventEmitter {
    fn emit(&self, event: &BehaviorEvent) -> Result<(), EmissionError> {
        ureq::post(&self.endpoint)
            .timeout(self.timeout)
            .send_json(event)
            .map_err(|err| match err {
                ureq::Error::Status(code, _) => EmissionError::Status(code),
                ureq::Error::Transport(t) => EmissionError::Transport(t.to_string()),
            })?;
        Ok(())
    }
}
