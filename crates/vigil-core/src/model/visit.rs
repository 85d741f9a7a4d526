// ── Visitor visits ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum VisitStatus {
    #[default]
    Scheduled,
    CheckedIn,
    CheckedOut,
}

/// A scheduled or ongoing visitor visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: String,
    pub visitor_name: String,
    #[serde(default)]
    pub company: String,
    pub host: String,
    /// Zones granted at check-in.
    #[serde(default)]
    pub zone_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escort: Option<String>,
    #[serde(default)]
    pub status: VisitStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_in_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_out_at: Option<DateTime<Utc>>,
}
