// ── Visit log ──
//
// Visitor visits and their check-in / check-out transitions. Check-in
// enforces the escort rule that the form only advises on.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::collection::SnapshotCollection;
use crate::error::CoreError;
use crate::escort::{escort_zones, requires_escort};
use crate::model::{AccessZone, Visit, VisitStatus};
use crate::stream::{Snapshot, VisitStream};

/// A check-in submission from the visitor form.
#[derive(Debug, Clone, Default)]
pub struct CheckIn {
    pub zone_ids: Vec<String>,
    pub escort: Option<String>,
}

pub struct VisitLog {
    visits: SnapshotCollection<Visit>,
}

impl VisitLog {
    pub fn new(visits: impl IntoIterator<Item = Visit>) -> Self {
        Self {
            visits: SnapshotCollection::new(visits),
        }
    }

    pub fn read(&self) -> Snapshot<Visit> {
        self.visits.snapshot()
    }

    pub fn get(&self, visit_id: &str) -> Option<Arc<Visit>> {
        self.visits.find(|v| v.id == visit_id)
    }

    pub fn subscribe(&self) -> VisitStream {
        self.visits.subscribe()
    }

    /// Check a scheduled visitor in.
    ///
    /// Returns `Ok(None)` when no visit has `visit_id`. Unknown zone ids,
    /// a visit that is not `Scheduled`, and an escort zone without an
    /// escort are errors and leave the log untouched.
    pub fn check_in(
        &self,
        visit_id: &str,
        request: CheckIn,
        catalog: &[AccessZone],
        now: DateTime<Utc>,
    ) -> Result<Option<Arc<Visit>>, CoreError> {
        let Some(visit) = self.get(visit_id) else {
            debug!(visit_id, "check-in: no such visit");
            return Ok(None);
        };
        expect_status(&visit, VisitStatus::Scheduled)?;

        if let Some(unknown) = request
            .zone_ids
            .iter()
            .find(|id| !catalog.iter().any(|z| &z.id == *id))
        {
            return Err(CoreError::ZoneNotFound {
                zone_id: unknown.clone(),
            });
        }

        let check = requires_escort(&request.zone_ids, catalog, request.escort.as_deref());
        if !check.valid {
            let zones: Vec<&str> = escort_zones(&request.zone_ids, catalog)
                .map(|z| z.name.as_str())
                .collect();
            return Err(CoreError::EscortRequired {
                visit_id: visit_id.to_owned(),
                zones: zones.join(", "),
            });
        }

        let escort = request
            .escort
            .map(|e| e.trim().to_owned())
            .filter(|e| !e.is_empty());
        let updated = self.visits.update(
            |v| v.id == visit_id,
            |v| Visit {
                status: VisitStatus::CheckedIn,
                zone_ids: request.zone_ids,
                escort,
                checked_in_at: Some(now),
                ..v.clone()
            },
        );
        info!(visit_id, escorted = check.any_zone_requires_escort, "visitor checked in");
        Ok(updated)
    }

    /// Check a visitor out. Returns `Ok(None)` when no visit has `visit_id`.
    pub fn check_out(
        &self,
        visit_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Arc<Visit>>, CoreError> {
        let Some(visit) = self.get(visit_id) else {
            debug!(visit_id, "check-out: no such visit");
            return Ok(None);
        };
        expect_status(&visit, VisitStatus::CheckedIn)?;

        let updated = self.visits.update(
            |v| v.id == visit_id,
            |v| Visit {
                status: VisitStatus::CheckedOut,
                checked_out_at: Some(now),
                ..v.clone()
            },
        );
        info!(visit_id, "visitor checked out");
        Ok(updated)
    }
}

fn expect_status(visit: &Visit, expected: VisitStatus) -> Result<(), CoreError> {
    if visit.status == expected {
        Ok(())
    } else {
        Err(CoreError::InvalidVisitState {
            visit_id: visit.id.clone(),
            status: visit.status,
            expected,
        })
    }
}
