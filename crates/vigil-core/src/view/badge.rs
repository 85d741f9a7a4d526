// ── Badge colors ──
//
// Derived at projection time from priority, acknowledgement and device
// status. Never stored on the records themselves.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::model::{DeviceStatus, Priority, SecurityEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    Red,
    Amber,
    Blue,
    Green,
    Gray,
}

impl From<Priority> for Tone {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Red => Self::Red,
            Priority::Amber => Self::Amber,
            Priority::Blue => Self::Blue,
        }
    }
}

impl From<DeviceStatus> for Tone {
    fn from(status: DeviceStatus) -> Self {
        match status {
            DeviceStatus::Online => Self::Green,
            DeviceStatus::Offline => Self::Red,
            DeviceStatus::Maintenance => Self::Amber,
        }
    }
}

/// Status badge text for an event.
pub fn status_label(event: &SecurityEvent) -> &'static str {
    if event.is_acknowledged() {
        "Acknowledged"
    } else {
        "Unacknowledged"
    }
}

/// Status badge color: green once acknowledged, otherwise the priority color.
pub fn status_tone(event: &SecurityEvent) -> Tone {
    if event.is_acknowledged() {
        Tone::Green
    } else {
        Tone::from(event.priority)
    }
}
