// ── Core error types ──
//
// The pipeline stages (filter, sort, stack, project) are infallible:
// malformed selections degrade to empty or placeholder views. Errors
// only come from the store and visit layers, and from decoding records
// that break the acknowledgement invariant.

use thiserror::Error;

use crate::model::VisitStatus;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Lookup errors ────────────────────────────────────────────────
    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("Visit not found: {visit_id}")]
    VisitNotFound { visit_id: String },

    #[error("Access zone not found: {zone_id}")]
    ZoneNotFound { zone_id: String },

    // ── Check-in validation ──────────────────────────────────────────
    #[error("Visit {visit_id} requires an escort for: {zones}")]
    EscortRequired { visit_id: String, zones: String },

    #[error("Visit {visit_id} is {status}, expected {expected}")]
    InvalidVisitState {
        visit_id: String,
        status: VisitStatus,
        expected: VisitStatus,
    },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Invalid event record {event_id}: {reason}")]
    InvalidRecord { event_id: String, reason: String },

    // ── Task errors ──────────────────────────────────────────────────
    #[error("Refresh cancelled")]
    Cancelled,
}
