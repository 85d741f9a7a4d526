//! The event pipeline: filter → sort → stack.
//!
//! Every stage is a pure function over `Arc`-shared events, recomputed
//! eagerly whenever the view parameters or the store change.

pub mod filter;
pub mod sort;
pub mod stack;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{SecurityEvent, Topology};

pub use filter::{AckFilter, FilterSpec, filter, matches_search};
pub use sort::{SortDirection, SortKey, SortSpec, compare, locale_cmp, sort};
pub use stack::{ALL_EVENTS, EventGroups, StackingMode, group};

/// The view parameters owned by one operator session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub filter: FilterSpec,
    #[serde(default)]
    pub sort: SortSpec,
    #[serde(default)]
    pub stacking: StackingMode,
}

/// Pipeline output: the flat ordered list and its stacked form.
#[derive(Debug, Clone)]
pub struct EventView {
    pub events: Vec<Arc<SecurityEvent>>,
    pub groups: EventGroups,
    pub stacking: StackingMode,
}

impl EventView {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Run the full pipeline over `events`.
pub fn evaluate(events: &[Arc<SecurityEvent>], view: &ViewState, topology: &Topology) -> EventView {
    let filtered = filter(events, &view.filter, topology);
    let sorted = sort(&filtered, view.sort);
    let groups = group(&sorted, view.stacking);

    debug!(
        input = events.len(),
        kept = sorted.len(),
        buckets = groups.len(),
        sort_key = %view.sort.key,
        stacking = %view.stacking,
        "pipeline evaluated"
    );

    EventView {
        events: sorted,
        groups,
        stacking: view.stacking,
    }
}
