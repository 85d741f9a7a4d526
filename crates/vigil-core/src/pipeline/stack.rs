// ── Stacking (grouping) ──
//
// Partitions an already filtered and sorted list into named buckets.
// Bucket order depends on the mode: fixed Red → Amber → Blue for
// priority, first-seen for location and building. Grouping never
// re-sorts events inside a bucket.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::model::{Priority, SecurityEvent};
use crate::view::Tone;

/// Bucket key used when stacking is off.
pub const ALL_EVENTS: &str = "All Events";

/// Ordered map of bucket key to the events in that bucket.
pub type EventGroups = IndexMap<String, Vec<Arc<SecurityEvent>>>;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StackingMode {
    #[default]
    None,
    Priority,
    Location,
    Building,
}

impl StackingMode {
    /// Human-readable name for mode pickers.
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No Stacking",
            Self::Priority => "Stack by Priority",
            Self::Location => "Stack by Location",
            Self::Building => "Stack by Building",
        }
    }

    /// Whether card views should draw a section header per bucket.
    pub const fn has_headers(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Color for a bucket header under this mode.
    pub fn bucket_tone(self, key: &str) -> Tone {
        match self {
            Self::Priority => Priority::iter()
                .find(|p| p.stack_key() == key)
                .map_or(Tone::Gray, Tone::from),
            Self::None | Self::Location | Self::Building => Tone::Gray,
        }
    }
}

/// Partition `events` into buckets according to `mode`.
///
/// Empty input yields an empty map under every mode.
pub fn group(events: &[Arc<SecurityEvent>], mode: StackingMode) -> EventGroups {
    match mode {
        StackingMode::None => {
            let mut groups = EventGroups::new();
            if !events.is_empty() {
                groups.insert(ALL_EVENTS.to_owned(), events.to_vec());
            }
            groups
        }
        StackingMode::Priority => Priority::iter()
            .filter_map(|priority| {
                let bucket: Vec<_> = events
                    .iter()
                    .filter(|e| e.priority == priority)
                    .map(Arc::clone)
                    .collect();
                (!bucket.is_empty()).then(|| (priority.stack_key().to_owned(), bucket))
            })
            .collect(),
        StackingMode::Location => group_by(events, |e| &e.location),
        StackingMode::Building => group_by(events, |e| &e.building),
    }
}

/// Group by a string field, buckets in first-seen order.
fn group_by(
    events: &[Arc<SecurityEvent>],
    key: impl Fn(&SecurityEvent) -> &String,
) -> EventGroups {
    let mut groups = EventGroups::new();
    for event in events {
        groups
            .entry(key(event.as_ref()).clone())
            .or_default()
            .push(Arc::clone(event));
    }
    groups
}
