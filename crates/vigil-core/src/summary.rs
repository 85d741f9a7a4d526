// ── Dashboard summary ──

use std::sync::Arc;

use serde::Serialize;

use crate::model::{Priority, SecurityEvent};

/// Counters shown above the event list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub total: usize,
    pub acknowledged: usize,
    pub unacknowledged: usize,
    pub red: usize,
    pub amber: usize,
    pub blue: usize,
    pub unacknowledged_red: usize,
}

impl EventSummary {
    /// Whether any Red event is still waiting for an operator.
    pub const fn needs_attention(&self) -> bool {
        self.unacknowledged_red > 0
    }
}

pub fn summarize(events: &[Arc<SecurityEvent>]) -> EventSummary {
    events.iter().fold(EventSummary::default(), |mut acc, e| {
        acc.total += 1;
        if e.is_acknowledged() {
            acc.acknowledged += 1;
        } else {
            acc.unacknowledged += 1;
        }
        match e.priority {
            Priority::Red => {
                acc.red += 1;
                if !e.is_acknowledged() {
                    acc.unacknowledged_red += 1;
                }
            }
            Priority::Amber => acc.amber += 1,
            Priority::Blue => acc.blue += 1,
        }
        acc
    })
}
