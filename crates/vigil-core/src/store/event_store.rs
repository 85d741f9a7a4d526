// ── Event store ──
//
// The authoritative in-memory collection of security events. Reads are
// snapshot clones; the only writes are ingestion and acknowledgement,
// both expressed as `Mutation`s.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::collection::SnapshotCollection;
use crate::acknowledge::acknowledge;
use crate::error::CoreError;
use crate::model::{Acknowledgement, SecurityEvent};
use crate::stream::{EventStream, Snapshot};

/// A write against the event store.
#[derive(Debug, Clone)]
pub enum Mutation {
    /// Mark an event as acknowledged by `actor` at `at`.
    Acknowledge {
        event_id: String,
        actor: String,
        at: DateTime<Utc>,
    },
    /// Append an event. An id already in the store is rejected.
    Ingest(SecurityEvent),
}

/// What a [`Mutation`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// First acknowledgement of the event.
    Acknowledged(Arc<SecurityEvent>),
    /// The event was already acknowledged; `previous` was overwritten.
    Reacknowledged {
        event: Arc<SecurityEvent>,
        previous: Acknowledgement,
    },
    /// A new event was appended.
    Ingested(Arc<SecurityEvent>),
    /// An event with the same id already exists; it is returned unchanged.
    Duplicate(Arc<SecurityEvent>),
    /// No event carries the id; the store is unchanged.
    NotFound { event_id: String },
}

impl MutationOutcome {
    /// The event the mutation produced, if any.
    pub fn event(&self) -> Option<&Arc<SecurityEvent>> {
        match self {
            Self::Acknowledged(event)
            | Self::Ingested(event)
            | Self::Duplicate(event)
            | Self::Reacknowledged { event, .. } => Some(event),
            Self::NotFound { .. } => None,
        }
    }

    /// Turn the silent no-op into an error for callers that want one.
    pub fn require_found(self) -> Result<Self, CoreError> {
        match self {
            Self::NotFound { event_id } => Err(CoreError::EventNotFound { event_id }),
            other => Ok(other),
        }
    }
}

/// Central store for the session's security events.
pub struct EventStore {
    events: SnapshotCollection<SecurityEvent>,
    last_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl EventStore {
    pub fn new(events: impl IntoIterator<Item = SecurityEvent>) -> Self {
        let (last_refresh, _) = watch::channel(None);
        Self {
            events: SnapshotCollection::new(events),
            last_refresh,
        }
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// The current events in ingestion order.
    pub fn read(&self) -> Snapshot<SecurityEvent> {
        self.events.snapshot()
    }

    pub fn get(&self, event_id: &str) -> Option<Arc<SecurityEvent>> {
        self.events.find(|e| e.id == event_id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of effective mutations applied so far.
    pub fn version(&self) -> u64 {
        self.events.version()
    }

    pub fn subscribe(&self) -> EventStream {
        self.events.subscribe()
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.borrow()
    }

    pub(crate) fn mark_refreshed(&self, at: DateTime<Utc>) {
        self.last_refresh.send_replace(Some(at));
    }

    // ── Writes ───────────────────────────────────────────────────────

    pub fn apply(&self, mutation: Mutation) -> MutationOutcome {
        match mutation {
            Mutation::Acknowledge {
                event_id,
                actor,
                at,
            } => self.apply_acknowledge(event_id, &actor, at),
            Mutation::Ingest(event) => self.apply_ingest(event),
        }
    }

    fn apply_acknowledge(
        &self,
        event_id: String,
        actor: &str,
        at: DateTime<Utc>,
    ) -> MutationOutcome {
        let current = self.read();
        let Some(existing) = current.iter().find(|e| e.id == event_id) else {
            debug!(event_id = %event_id, "acknowledge: no such event");
            return MutationOutcome::NotFound { event_id };
        };
        let previous = existing.acknowledgement.clone();

        let next = acknowledge(&current, &event_id, actor, at);
        let event = next
            .iter()
            .find(|e| e.id == event_id)
            .map(Arc::clone)
            .unwrap_or_else(|| Arc::clone(existing));
        self.events.replace(next);

        match previous {
            Some(previous) => {
                warn!(
                    event_id = %event_id,
                    previous_actor = %previous.by,
                    actor,
                    "acknowledgement overwritten"
                );
                MutationOutcome::Reacknowledged { event, previous }
            }
            None => {
                info!(event_id = %event_id, actor, "event acknowledged");
                MutationOutcome::Acknowledged(event)
            }
        }
    }

    fn apply_ingest(&self, event: SecurityEvent) -> MutationOutcome {
        // Stored events are immutable apart from their acknowledgement.
        if let Some(existing) = self.get(&event.id) {
            warn!(event_id = %event.id, "ingest rejected: id already stored");
            return MutationOutcome::Duplicate(existing);
        }

        debug!(event_id = %event.id, priority = %event.priority, "event ingested");
        MutationOutcome::Ingested(self.events.push(event))
    }
}
