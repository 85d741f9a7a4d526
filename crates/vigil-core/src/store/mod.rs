// ── Session stores ──
//
// Explicit store objects owned by the console: no module-level mutable
// state. Every effective write publishes a new snapshot to subscribers.

mod collection;
mod event_store;
pub mod refresh;
mod visit_log;

pub use event_store::{EventStore, Mutation, MutationOutcome};
pub use visit_log::{CheckIn, VisitLog};
