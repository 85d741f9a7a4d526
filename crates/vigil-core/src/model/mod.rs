// ── Domain model ──
//
// Plain data: security events, the static site topology, access zones
// and visitor visits.

pub mod dataset;
pub mod event;
pub mod topology;
pub mod visit;
pub mod zone;

// ── Re-exports ──────────────────────────────────────────────────────

pub use dataset::Dataset;
pub use event::{Acknowledgement, Coordinates, Priority, SecurityEvent};
pub use topology::{Building, Device, DeviceStatus, Floor, Topology};
pub use visit::{Visit, VisitStatus};
pub use zone::AccessZone;
