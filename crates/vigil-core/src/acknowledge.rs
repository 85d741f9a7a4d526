//! The acknowledgement transition: the only mutation an event undergoes.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::model::SecurityEvent;

/// Return a copy of `events` with `event_id` acknowledged by `actor` at `now`.
///
/// Every other event is shared with the input (same `Arc`). An unknown id
/// yields the input unchanged. Acknowledging an already acknowledged
/// event overwrites its actor and timestamp.
pub fn acknowledge(
    events: &[Arc<SecurityEvent>],
    event_id: &str,
    actor: &str,
    now: DateTime<Utc>,
) -> Vec<Arc<SecurityEvent>> {
    events
        .iter()
        .map(|event| {
            if event.id == event_id {
                Arc::new(event.with_acknowledgement(actor, now))
            } else {
                Arc::clone(event)
            }
        })
        .collect()
}
