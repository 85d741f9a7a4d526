//! vigil-core: security-event monitoring pipeline.
//!
//! Holds a session's security events in an [`EventStore`], runs them
//! through filter → sort → stack, and projects the result into rows,
//! card sections or floor-map markers. Also carries the acknowledgement
//! transition, the visitor escort rule and the visit log.
//!
//! ```no_run
//! use vigil_core::{Console, ConsoleConfig, Dataset, StackingMode};
//!
//! let console = Console::new(Dataset::default(), ConsoleConfig::default());
//! console.update_view(|view| view.stacking = StackingMode::Priority);
//! for section in console.cards() {
//!     println!("{:?}: {}", section.header.map(|h| h.key), section.cards.len());
//! }
//! ```

pub mod acknowledge;
pub mod config;
pub mod console;
pub mod error;
pub mod escort;
pub mod model;
pub mod pipeline;
pub mod store;
pub mod stream;
pub mod summary;
pub mod view;

#[cfg(test)]
mod testing;

// ── Primary re-exports ──────────────────────────────────────────────
pub use acknowledge::acknowledge;
pub use config::ConsoleConfig;
pub use console::Console;
pub use error::CoreError;
pub use escort::{EscortBanner, EscortCheck, escort_zones, requires_escort};
pub use store::{CheckIn, EventStore, Mutation, MutationOutcome, VisitLog};
pub use stream::{EventStream, Snapshot, SnapshotStream, VisitStream};
pub use summary::{EventSummary, summarize};

pub use model::{
    AccessZone, Acknowledgement, Building, Coordinates, Dataset, Device, DeviceStatus, Floor,
    Priority, SecurityEvent, Topology, Visit, VisitStatus,
};
pub use pipeline::{
    AckFilter, EventGroups, EventView, FilterSpec, SortDirection, SortKey, SortSpec,
    StackingMode, ViewState, evaluate,
};
pub use view::{
    CardSection, EventCard, EventMarker, EventRow, MapView, SectionHeader, Tone, project_cards,
    project_map, project_rows,
};
