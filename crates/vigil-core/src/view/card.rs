// ── Card projection ──
//
// Richer per-event summaries. With stacking on, cards are grouped into
// sections headed by the bucket key and its event count.

use serde::Serialize;

use super::badge::{Tone, status_label, status_tone};
use super::table::DATE_FORMAT;
use crate::model::{Priority, SecurityEvent};
use crate::pipeline::{EventGroups, StackingMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub tone: Tone,
    pub description: String,
    pub device_name: String,
    /// `"{location} · {building}, {floor}"`.
    pub place: String,
    pub when: String,
    pub status: &'static str,
    pub status_tone: Tone,
    /// `"Acknowledged by {actor} at {time}"` once acknowledged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgement: Option<String>,
}

impl From<&SecurityEvent> for EventCard {
    fn from(e: &SecurityEvent) -> Self {
        Self {
            id: e.id.clone(),
            title: e.event_type.clone(),
            priority: e.priority,
            tone: Tone::from(e.priority),
            description: e.description.clone(),
            device_name: e.device_name.clone(),
            place: format!("{} · {}, {}", e.location, e.building, e.floor),
            when: e.event_date.format(DATE_FORMAT).to_string(),
            status: status_label(e),
            status_tone: status_tone(e),
            acknowledgement: e.acknowledgement.as_ref().map(|a| {
                format!("Acknowledged by {} at {}", a.by, a.at.format(DATE_FORMAT))
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionHeader {
    pub key: String,
    pub count: usize,
    pub tone: Tone,
}

/// A run of cards, optionally under a bucket header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<SectionHeader>,
    pub cards: Vec<EventCard>,
}

/// Project stacked events into card sections.
///
/// With `StackingMode::None` there is at most one section and it has no
/// header. An empty input produces no sections.
pub fn project_cards(groups: &EventGroups, mode: StackingMode) -> Vec<CardSection> {
    groups
        .iter()
        .filter(|(_, events)| !events.is_empty())
        .map(|(key, events)| CardSection {
            header: mode.has_headers().then(|| SectionHeader {
                key: key.clone(),
                count: events.len(),
                tone: mode.bucket_tone(key),
            }),
            cards: events.iter().map(|e| EventCard::from(e.as_ref())).collect(),
        })
        .collect()
}
