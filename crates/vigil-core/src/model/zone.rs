// ── Access zones ──

use serde::{Deserialize, Serialize};

/// A physical area with its own access policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessZone {
    pub id: String,
    pub name: String,
    pub building: String,
    pub floor: String,
    /// Visitors entering this zone must be accompanied.
    #[serde(default)]
    pub requires_escort: bool,
}
