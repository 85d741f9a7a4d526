// ── Security event domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::CoreError;

/// Severity tier of a security event. Red is the most severe.
///
/// Variant order is the priority rank: `Red < Amber < Blue`, so an
/// ascending sort puts Red first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Priority {
    Red,
    Amber,
    Blue,
}

impl Priority {
    /// Fixed sort rank: `Red = 0`, `Amber = 1`, `Blue = 2`.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Amber => 1,
            Self::Blue => 2,
        }
    }

    /// Bucket key used when stacking by priority.
    pub const fn stack_key(self) -> &'static str {
        match self {
            Self::Red => "Red Priority",
            Self::Amber => "Amber Priority",
            Self::Blue => "Blue Priority",
        }
    }
}

/// Pixel position on a floor map image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// Who acknowledged an event, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub by: String,
    pub at: DateTime<Utc>,
}

/// A discrete security or access event.
///
/// Everything except the acknowledgement is fixed at ingestion. The
/// acknowledgement is an `Option` so that "acknowledged without an actor"
/// cannot be represented; on the wire it is spread over the
/// `acknowledged` / `acknowledgedBy` / `acknowledgedAt` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SecurityEventRecord", into = "SecurityEventRecord")]
pub struct SecurityEvent {
    pub id: String,
    pub event_date: DateTime<Utc>,
    pub priority: Priority,
    pub event_type: String,
    pub device_name: String,
    pub location: String,
    pub building: String,
    pub floor: String,
    pub description: String,
    pub acknowledgement: Option<Acknowledgement>,
    pub coordinates: Option<Coordinates>,
}

impl SecurityEvent {
    pub fn is_acknowledged(&self) -> bool {
        self.acknowledgement.is_some()
    }

    pub fn acknowledged_by(&self) -> Option<&str> {
        self.acknowledgement.as_ref().map(|a| a.by.as_str())
    }

    pub fn acknowledged_at(&self) -> Option<DateTime<Utc>> {
        self.acknowledgement.as_ref().map(|a| a.at)
    }

    /// Copy of this event stamped as acknowledged by `actor` at `at`.
    ///
    /// An existing acknowledgement is overwritten.
    pub fn with_acknowledgement(&self, actor: &str, at: DateTime<Utc>) -> Self {
        Self {
            acknowledgement: Some(Acknowledgement {
                by: actor.to_owned(),
                at,
            }),
            ..self.clone()
        }
    }

    /// The searchable text fields, in a fixed order.
    pub(crate) fn search_fields(&self) -> [&str; 7] {
        [
            &self.id,
            &self.event_type,
            &self.device_name,
            &self.location,
            &self.building,
            &self.floor,
            &self.description,
        ]
    }
}

// ── Wire representation ──────────────────────────────────────────────

/// Flat record form of [`SecurityEvent`] used for (de)serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecurityEventRecord {
    id: String,
    event_date: DateTime<Utc>,
    priority: Priority,
    event_type: String,
    device_name: String,
    location: String,
    building: String,
    floor: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    acknowledged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    acknowledged_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    acknowledged_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    coordinates: Option<Coordinates>,
}

impl TryFrom<SecurityEventRecord> for SecurityEvent {
    type Error = CoreError;

    fn try_from(r: SecurityEventRecord) -> Result<Self, Self::Error> {
        let acknowledgement = match (r.acknowledged, r.acknowledged_by, r.acknowledged_at) {
            (false, None, None) => None,
            (true, Some(by), Some(at)) => Some(Acknowledgement { by, at }),
            (false, _, _) => {
                return Err(CoreError::InvalidRecord {
                    event_id: r.id,
                    reason: "acknowledgedBy/acknowledgedAt set on an unacknowledged event".into(),
                });
            }
            (true, _, _) => {
                return Err(CoreError::InvalidRecord {
                    event_id: r.id,
                    reason: "acknowledged event needs both acknowledgedBy and acknowledgedAt"
                        .into(),
                });
            }
        };

        Ok(Self {
            id: r.id,
            event_date: r.event_date,
            priority: r.priority,
            event_type: r.event_type,
            device_name: r.device_name,
            location: r.location,
            building: r.building,
            floor: r.floor,
            description: r.description,
            acknowledgement,
            coordinates: r.coordinates,
        })
    }
}

impl From<SecurityEvent> for SecurityEventRecord {
    fn from(e: SecurityEvent) -> Self {
        let (acknowledged_by, acknowledged_at) = match e.acknowledgement {
            Some(Acknowledgement { by, at }) => (Some(by), Some(at)),
            None => (None, None),
        };
        Self {
            id: e.id,
            event_date: e.event_date,
            priority: e.priority,
            event_type: e.event_type,
            device_name: e.device_name,
            location: e.location,
            building: e.building,
            floor: e.floor,
            description: e.description,
            acknowledged: acknowledged_by.is_some(),
            acknowledged_by,
            acknowledged_at,
            coordinates: e.coordinates,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(extra: serde_json::Value) -> serde_json::Value {
        let mut base = json!({
            "id": "EVT-001",
            "eventDate": "2024-03-01T08:15:00Z",
            "priority": "Red",
            "eventType": "Door Forced Open",
            "deviceName": "Reader 1A",
            "location": "Lobby",
            "building": "Headquarters",
            "floor": "Ground Floor",
            "description": "Main entrance forced",
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        base
    }

    #[test]
    fn rank_follows_severity() {
        assert_eq!(Priority::Red.rank(), 0);
        assert_eq!(Priority::Amber.rank(), 1);
        assert_eq!(Priority::Blue.rank(), 2);
        assert!(Priority::Red < Priority::Blue);
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("amber".parse::<Priority>().unwrap(), Priority::Amber);
        assert_eq!("RED".parse::<Priority>().unwrap(), Priority::Red);
        assert!("green".parse::<Priority>().is_err());
    }

    #[test]
    fn decodes_unacknowledged_event() {
        let event: SecurityEvent = serde_json::from_value(record(json!({}))).unwrap();
        assert!(!event.is_acknowledged());
        assert_eq!(event.acknowledged_by(), None);
        assert!(event.coordinates.is_none());
    }

    #[test]
    fn decodes_acknowledged_event() {
        let event: SecurityEvent = serde_json::from_value(record(json!({
            "acknowledged": true,
            "acknowledgedBy": "J. Smith",
            "acknowledgedAt": "2024-03-01T08:20:00Z",
            "coordinates": { "x": 120.0, "y": 45.5 },
        })))
        .unwrap();
        assert_eq!(event.acknowledged_by(), Some("J. Smith"));
        assert_eq!(event.coordinates, Some(Coordinates { x: 120.0, y: 45.5 }));
    }

    #[test]
    fn rejects_actor_without_acknowledged_flag() {
        let err = serde_json::from_value::<SecurityEvent>(record(json!({
            "acknowledgedBy": "J. Smith",
        })))
        .unwrap_err();
        assert!(err.to_string().contains("EVT-001"));
    }

    #[test]
    fn rejects_acknowledged_flag_without_timestamp() {
        let result = serde_json::from_value::<SecurityEvent>(record(json!({
            "acknowledged": true,
            "acknowledgedBy": "J. Smith",
        })));
        assert!(result.is_err());
    }

    #[test]
    fn serializes_flat_acknowledgement_fields() {
        let event: SecurityEvent = serde_json::from_value(record(json!({}))).unwrap();
        let at = "2024-03-01T09:00:00Z".parse().unwrap();
        let value = serde_json::to_value(event.with_acknowledgement("Ops", at)).unwrap();
        assert_eq!(value["acknowledged"], json!(true));
        assert_eq!(value["acknowledgedBy"], json!("Ops"));
        assert_eq!(value["eventType"], json!("Door Forced Open"));
        assert!(value.get("coordinates").is_none());
    }
}
