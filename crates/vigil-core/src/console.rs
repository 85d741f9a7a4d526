// ── Operator console ──
//
// One operator session over a loaded dataset: the event store, the visit
// log, the static topology and zone catalog, and the current view
// parameters. Every projection re-runs the pipeline against the latest
// store snapshot.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::ConsoleConfig;
use crate::error::CoreError;
use crate::escort::{EscortCheck, requires_escort};
use crate::model::{AccessZone, Dataset, Topology, Visit};
use crate::pipeline::{EventView, ViewState, evaluate};
use crate::store::{CheckIn, EventStore, Mutation, MutationOutcome, VisitLog, refresh};
use crate::summary::{EventSummary, summarize};
use crate::view::{CardSection, EventRow, MapView, project_cards, project_map, project_rows};

/// Handle to an operator session.
///
/// Cheaply cloneable; clones share the same stores and view state.
#[derive(Clone)]
pub struct Console {
    inner: Arc<ConsoleInner>,
}

struct ConsoleInner {
    config: ConsoleConfig,
    topology: Topology,
    zones: Vec<AccessZone>,
    events: Arc<EventStore>,
    visits: VisitLog,
    view: watch::Sender<ViewState>,
}

impl Console {
    pub fn new(dataset: Dataset, config: ConsoleConfig) -> Self {
        let Dataset {
            topology,
            zones,
            events,
            visits,
        } = dataset;
        let (view, _) = watch::channel(config.view.clone());

        debug!(
            events = events.len(),
            visits = visits.len(),
            zones = zones.len(),
            buildings = topology.buildings.len(),
            "console session opened"
        );

        Self {
            inner: Arc::new(ConsoleInner {
                config,
                topology,
                zones,
                events: Arc::new(EventStore::new(events)),
                visits: VisitLog::new(visits),
                view,
            }),
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.inner.config
    }

    pub fn topology(&self) -> &Topology {
        &self.inner.topology
    }

    /// The access-zone catalog.
    pub fn zones(&self) -> &[AccessZone] {
        &self.inner.zones
    }

    pub fn events(&self) -> &Arc<EventStore> {
        &self.inner.events
    }

    pub fn visits(&self) -> &VisitLog {
        &self.inner.visits
    }

    /// The session's current state as a plain dataset, for persisting.
    pub fn dataset(&self) -> Dataset {
        Dataset {
            topology: self.inner.topology.clone(),
            zones: self.inner.zones.clone(),
            events: self.inner.events.read().iter().map(|e| (**e).clone()).collect(),
            visits: self.inner.visits.read().iter().map(|v| (**v).clone()).collect(),
        }
    }

    // ── View state ───────────────────────────────────────────────────

    pub fn view(&self) -> ViewState {
        self.inner.view.borrow().clone()
    }

    pub fn set_view(&self, view: ViewState) {
        self.inner.view.send_replace(view);
    }

    /// Edit the view state in place. Subscribers are notified only when
    /// the edit changes something.
    pub fn update_view(&self, edit: impl FnOnce(&mut ViewState)) {
        self.inner.view.send_if_modified(|view| {
            let before = view.clone();
            edit(view);
            *view != before
        });
    }

    pub fn subscribe_view(&self) -> watch::Receiver<ViewState> {
        self.inner.view.subscribe()
    }

    // ── Projections ──────────────────────────────────────────────────

    /// Run the pipeline over the current store snapshot.
    pub fn evaluate(&self) -> EventView {
        evaluate(&self.inner.events.read(), &self.view(), &self.inner.topology)
    }

    pub fn rows(&self) -> Vec<EventRow> {
        project_rows(&self.evaluate().events)
    }

    pub fn cards(&self) -> Vec<CardSection> {
        let view = self.evaluate();
        project_cards(&view.groups, view.stacking)
    }

    /// Floor map for the building and floor selected in the filter.
    pub fn map(&self) -> MapView {
        let state = self.view();
        let view = evaluate(&self.inner.events.read(), &state, &self.inner.topology);
        project_map(
            &view.events,
            &self.inner.topology,
            state.filter.building_id.as_deref(),
            state.filter.floor_id.as_deref(),
        )
    }

    /// Counters over every event in the store, ignoring the filter.
    pub fn summary(&self) -> EventSummary {
        summarize(&self.inner.events.read())
    }

    // ── Acknowledgement ──────────────────────────────────────────────

    /// Acknowledge `event_id` as the configured operator, now.
    pub fn acknowledge(&self, event_id: &str) -> MutationOutcome {
        self.acknowledge_at(event_id, Utc::now())
    }

    pub fn acknowledge_at(&self, event_id: &str, at: DateTime<Utc>) -> MutationOutcome {
        self.inner.events.apply(Mutation::Acknowledge {
            event_id: event_id.to_owned(),
            actor: self.inner.config.operator.clone(),
            at,
        })
    }

    // ── Visitors ─────────────────────────────────────────────────────

    /// Evaluate the escort rule for a zone selection against the catalog.
    pub fn check_escort<S: AsRef<str>>(
        &self,
        zone_ids: &[S],
        escort: Option<&str>,
    ) -> EscortCheck {
        requires_escort(zone_ids, &self.inner.zones, escort)
    }

    pub fn check_in(
        &self,
        visit_id: &str,
        request: CheckIn,
    ) -> Result<Option<Arc<Visit>>, CoreError> {
        self.inner
            .visits
            .check_in(visit_id, request, &self.inner.zones, Utc::now())
    }

    pub fn check_out(&self, visit_id: &str) -> Result<Option<Arc<Visit>>, CoreError> {
        self.inner.visits.check_out(visit_id, Utc::now())
    }

    // ── Refresh ──────────────────────────────────────────────────────

    /// Simulated refresh with the configured delay, then re-evaluate.
    pub async fn refresh(&self, cancel: &CancellationToken) -> Result<EventView, CoreError> {
        self.refresh_after(self.inner.config.refresh_delay, cancel).await
    }

    /// Simulated refresh with an explicit delay.
    pub async fn refresh_after(
        &self,
        delay: Duration,
        cancel: &CancellationToken,
    ) -> Result<EventView, CoreError> {
        let snapshot = refresh::refresh(&self.inner.events, delay, cancel).await?;
        Ok(evaluate(&snapshot, &self.view(), &self.inner.topology))
    }
}
