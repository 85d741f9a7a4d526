#![allow(clippy::unwrap_used)]
// Pipeline properties exercised through the public API.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use vigil_core::pipeline::{filter, group, sort};
use vigil_core::{
    AckFilter, Console, ConsoleConfig, Dataset, EscortCheck, FilterSpec, MutationOutcome,
    Priority, SecurityEvent, SortDirection, SortKey, SortSpec, StackingMode, Topology, ViewState,
    acknowledge, evaluate, requires_escort,
};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).single().unwrap()
}

fn event(id: &str, priority: Priority, minute: i64, location: &str) -> Arc<SecurityEvent> {
    Arc::new(SecurityEvent {
        id: id.to_owned(),
        event_date: base_time() + Duration::minutes(minute),
        priority,
        event_type: "Motion Detected".into(),
        device_name: "Camera".into(),
        location: location.into(),
        building: "Headquarters".into(),
        floor: "Ground Floor".into(),
        description: String::new(),
        acknowledgement: None,
        coordinates: None,
    })
}

fn mixed() -> Vec<Arc<SecurityEvent>> {
    let events = vec![
        event("E1", Priority::Blue, 5, "lobby"),
        event("E2", Priority::Red, 1, "Dock"),
        event("E3", Priority::Amber, 5, "Lobby"),
        event("E4", Priority::Red, 3, "atrium"),
        event("E5", Priority::Blue, 2, "Dock"),
    ];
    let events = acknowledge(&events, "E2", "ops", base_time());
    acknowledge(&events, "E5", "ops", base_time())
}

fn ids(events: &[Arc<SecurityEvent>]) -> Vec<&str> {
    events.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn ack_modes_partition_all() {
    let events = mixed();
    let topology = Topology::default();
    let with = |status| {
        filter(
            &events,
            &FilterSpec {
                status,
                ..FilterSpec::default()
            },
            &topology,
        )
    };

    let all = with(AckFilter::All);
    let acked = with(AckFilter::Acknowledged);
    let unacked = with(AckFilter::Unacknowledged);

    assert_eq!(acked.len() + unacked.len(), all.len());
    assert!(acked.iter().all(|e| e.is_acknowledged()));
    assert!(unacked.iter().all(|e| !e.is_acknowledged()));
    let mut union: Vec<_> = ids(&acked).into_iter().chain(ids(&unacked)).collect();
    union.sort_unstable();
    let mut expected = ids(&all);
    expected.sort_unstable();
    assert_eq!(union, expected);
}

#[test]
fn sorting_is_idempotent_for_every_spec() {
    let events = mixed();
    for key in [SortKey::Date, SortKey::Priority, SortKey::Location, SortKey::Type] {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let spec = SortSpec::new(key, direction);
            let once = sort(&events, spec);
            let twice = sort(&once, spec);
            assert_eq!(ids(&once), ids(&twice), "{key} {direction}");
        }
    }
}

#[test]
fn priority_ascending_puts_red_before_blue() {
    let sorted = sort(&mixed(), SortSpec::new(SortKey::Priority, SortDirection::Asc));
    let last_red = sorted.iter().rposition(|e| e.priority == Priority::Red).unwrap();
    let first_blue = sorted.iter().position(|e| e.priority == Priority::Blue).unwrap();
    assert!(last_red < first_blue);
}

#[test]
fn date_ties_keep_input_order_in_both_directions() {
    let events = mixed();
    let asc = sort(&events, SortSpec::new(SortKey::Date, SortDirection::Asc));
    let desc = sort(&events, SortSpec::new(SortKey::Date, SortDirection::Desc));
    assert_eq!(ids(&asc), ["E2", "E5", "E4", "E1", "E3"]);
    assert_eq!(ids(&desc), ["E1", "E3", "E4", "E5", "E2"]);
}

#[test]
fn location_sort_ignores_case_first() {
    let sorted = sort(&mixed(), SortSpec::new(SortKey::Location, SortDirection::Asc));
    let locations: Vec<_> = sorted.iter().map(|e| e.location.as_str()).collect();
    assert_eq!(locations, ["atrium", "Dock", "Dock", "lobby", "Lobby"]);
}

#[test]
fn grouping_is_complete_without_empty_priority_buckets() {
    let events = mixed();
    for mode in [
        StackingMode::None,
        StackingMode::Priority,
        StackingMode::Location,
        StackingMode::Building,
    ] {
        let groups = group(&events, mode);
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, events.len(), "{mode}");
        assert!(groups.values().all(|bucket| !bucket.is_empty()), "{mode}");
    }
}

#[test]
fn acknowledgement_changes_exactly_one_record() {
    let events = mixed();
    let later = base_time() + Duration::hours(1);

    let next = acknowledge(&events, "E3", "desk", later);
    let changed: Vec<_> = events
        .iter()
        .zip(&next)
        .filter(|(before, after)| !Arc::ptr_eq(before, after))
        .map(|(_, after)| after)
        .collect();
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].id, "E3");
    assert_eq!(changed[0].acknowledged_by(), Some("desk"));
    assert_eq!(changed[0].acknowledged_at(), Some(later));

    let unchanged = acknowledge(&events, "nope", "desk", later);
    assert!(events.iter().zip(&unchanged).all(|(a, b)| Arc::ptr_eq(a, b)));
}

#[test]
fn escort_truth_table() {
    let catalog: Vec<vigil_core::AccessZone> = serde_json::from_value(json!([
        { "id": "z1", "name": "Lobby", "building": "HQ", "floor": "G", "requiresEscort": false },
        { "id": "z2", "name": "Vault", "building": "HQ", "floor": "B", "requiresEscort": true }
    ]))
    .unwrap();

    let check = |zones: &[&str], escort| requires_escort(zones, &catalog, escort);
    let result = |valid, any| EscortCheck {
        valid,
        any_zone_requires_escort: any,
    };

    assert_eq!(check(&[], None), result(true, false));
    assert_eq!(check(&["z1"], None), result(true, false));
    assert_eq!(check(&["z1", "z2"], None), result(false, true));
    assert_eq!(check(&["z2"], Some("")), result(false, true));
    assert_eq!(check(&["z2"], Some("Sam Ortiz")), result(true, true));
}

#[test]
fn end_to_end_priority_stacking() {
    let events = vec![
        event("B1", Priority::Blue, 0, "Lobby"),
        event("R1", Priority::Red, 1, "Lobby"),
        event("A1", Priority::Amber, 2, "Lobby"),
        event("R2", Priority::Red, 3, "Lobby"),
    ];
    let view = ViewState {
        sort: SortSpec::new(SortKey::Priority, SortDirection::Asc),
        stacking: StackingMode::Priority,
        ..ViewState::default()
    };

    let result = evaluate(&events, &view, &Topology::default());

    let shape: Vec<_> = result
        .groups
        .iter()
        .map(|(key, bucket)| (key.as_str(), ids(bucket)))
        .collect();
    assert_eq!(
        shape,
        [
            ("Red Priority", vec!["R1", "R2"]),
            ("Amber Priority", vec!["A1"]),
            ("Blue Priority", vec!["B1"]),
        ]
    );
}

#[tokio::test]
async fn acknowledgement_notifies_subscribers() {
    let dataset: Dataset = serde_json::from_value(json!({
        "events": [{
            "id": "EVT-9",
            "eventDate": "2024-03-01T09:00:00Z",
            "priority": "Red",
            "eventType": "Door Forced Open",
            "deviceName": "Door 3",
            "location": "Loading Dock",
            "building": "Headquarters",
            "floor": "Ground Floor"
        }]
    }))
    .unwrap();
    let console = Console::new(dataset, ConsoleConfig::default());
    let mut stream = console.events().subscribe();

    let outcome = console.acknowledge("EVT-9");
    assert!(matches!(outcome, MutationOutcome::Acknowledged(_)));

    let snapshot = stream.changed().await.unwrap();
    assert_eq!(snapshot[0].acknowledged_by(), Some("Security Desk"));
    assert!(!console.summary().needs_attention());
}
