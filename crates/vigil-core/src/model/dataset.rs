// ── Session dataset ──
//
// Everything a console session starts from, as plain data. Loading it
// from disk is the caller's business.

use serde::{Deserialize, Serialize};

use super::event::SecurityEvent;
use super::topology::Topology;
use super::visit::Visit;
use super::zone::AccessZone;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, rename = "buildings")]
    pub topology: Topology,
    #[serde(default)]
    pub zones: Vec<AccessZone>,
    #[serde(default)]
    pub events: Vec<SecurityEvent>,
    #[serde(default)]
    pub visits: Vec<Visit>,
}
