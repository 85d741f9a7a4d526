// ── Tabular projection ──

use std::sync::Arc;

use serde::Serialize;

use super::badge::{Tone, status_label, status_tone};
use crate::model::{Priority, SecurityEvent};

/// Display format for event timestamps.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One table row, with display fields computed from the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRow {
    pub id: String,
    pub date: String,
    pub priority: Priority,
    pub priority_tone: Tone,
    pub event_type: String,
    pub device_name: String,
    pub location: String,
    pub building: String,
    pub floor: String,
    pub status: &'static str,
    pub status_tone: Tone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledged_by: Option<String>,
}

impl From<&SecurityEvent> for EventRow {
    fn from(e: &SecurityEvent) -> Self {
        Self {
            id: e.id.clone(),
            date: e.event_date.format(DATE_FORMAT).to_string(),
            priority: e.priority,
            priority_tone: Tone::from(e.priority),
            event_type: e.event_type.clone(),
            device_name: e.device_name.clone(),
            location: e.location.clone(),
            building: e.building.clone(),
            floor: e.floor.clone(),
            status: status_label(e),
            status_tone: status_tone(e),
            acknowledged_by: e.acknowledged_by().map(str::to_owned),
        }
    }
}

/// One row per event, in the order given.
pub fn project_rows(events: &[Arc<SecurityEvent>]) -> Vec<EventRow> {
    events.iter().map(|e| EventRow::from(e.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{event, ts};

    #[test]
    fn row_formats_date_and_badges() {
        let events = vec![
            Arc::new(event("E1", Priority::Amber)),
            Arc::new(event("E2", Priority::Red).with_acknowledgement("ops", ts(9))),
        ];

        let rows = project_rows(&events);

        assert_eq!(rows[0].date, "2024-03-01 08:00:00");
        assert_eq!(rows[0].priority_tone, Tone::Amber);
        assert_eq!(rows[0].status, "Unacknowledged");
        assert_eq!(rows[0].status_tone, Tone::Amber);
        assert_eq!(rows[1].status, "Acknowledged");
        assert_eq!(rows[1].status_tone, Tone::Green);
        assert_eq!(rows[1].acknowledged_by.as_deref(), Some("ops"));
    }

    #[test]
    fn projection_does_not_touch_events() {
        let events = vec![Arc::new(event("E1", Priority::Blue))];
        let before = (*events[0]).clone();
        let _ = project_rows(&events);
        assert_eq!(*events[0], before);
    }
}
