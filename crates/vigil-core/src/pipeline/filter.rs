// ── Event filtering ──
//
// Three predicates composed by AND: acknowledgement status, free-text
// search and spatial scope. Order-preserving and infallible.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::model::{SecurityEvent, Topology};

/// Which acknowledgement states to keep.
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
pub enum AckFilter {
    #[default]
    All,
    Acknowledged,
    Unacknowledged,
}

impl AckFilter {
    pub fn matches(self, event: &SecurityEvent) -> bool {
        match self {
            Self::All => true,
            Self::Acknowledged => event.is_acknowledged(),
            Self::Unacknowledged => !event.is_acknowledged(),
        }
    }
}

/// User-selected filter parameters, rebuilt on every interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    #[serde(default)]
    pub status: AckFilter,
    #[serde(default)]
    pub search: String,
    /// Selected building id (not display name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_id: Option<String>,
    /// Selected floor id within the building.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<String>,
}

/// Spatial constraint after resolving selected ids against the topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope<'a> {
    Anywhere,
    /// A building was selected but does not exist: nothing matches.
    Nowhere,
    Building(&'a str),
    Floor { building: &'a str, floor: &'a str },
}

impl<'a> Scope<'a> {
    fn resolve(spec: &FilterSpec, topology: &'a Topology) -> Self {
        let Some(building_id) = spec.building_id.as_deref() else {
            return Self::Anywhere;
        };
        let Some(building) = topology.building(building_id) else {
            return Self::Nowhere;
        };
        // An unknown floor falls back to building-only filtering.
        match spec.floor_id.as_deref().and_then(|id| building.floor(id)) {
            Some(floor) => Self::Floor {
                building: &building.name,
                floor: &floor.name,
            },
            None => Self::Building(&building.name),
        }
    }

    fn matches(self, event: &SecurityEvent) -> bool {
        match self {
            Self::Anywhere => true,
            Self::Nowhere => false,
            Self::Building(building) => event.building == building,
            Self::Floor { building, floor } => event.building == building && event.floor == floor,
        }
    }
}

/// Case-insensitive substring match over the searchable fields.
/// An empty term matches everything.
pub fn matches_search(event: &SecurityEvent, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    event
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keep the events that satisfy every predicate of `spec`, in input order.
pub fn filter(
    events: &[Arc<SecurityEvent>],
    spec: &FilterSpec,
    topology: &Topology,
) -> Vec<Arc<SecurityEvent>> {
    let scope = Scope::resolve(spec, topology);
    events
        .iter()
        .filter(|e| spec.status.matches(e))
        .filter(|e| matches_search(e, &spec.search))
        .filter(|e| scope.matches(e))
        .map(Arc::clone)
        .collect()
}
