//! Read-only projections of pipeline output for the three renderers:
//! tabular rows, stacked cards and floor-map markers.

mod badge;
pub mod card;
pub mod map;
pub mod table;

pub use badge::{Tone, status_label, status_tone};
pub use card::{CardSection, EventCard, SectionHeader, project_cards};
pub use map::{DeviceMarker, EventMarker, FloorMap, MapView, project_map};
pub use table::{DATE_FORMAT, EventRow, project_rows};
