// ── Floor-map projection ──
//
// Places filtered events and static devices on one floor plan. Without a
// resolved building and floor there is nothing to draw, and the view says
// so instead of returning an empty map.

use std::sync::Arc;

use serde::Serialize;

use super::badge::Tone;
use crate::model::{DeviceStatus, Priority, SecurityEvent, Topology};

/// Marker for an event. Clicking it opens the event by `event_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMarker {
    pub event_id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub priority: Priority,
    pub tone: Tone,
    pub acknowledged: bool,
}

/// Marker for a fixed device.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceMarker {
    pub device_id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub status: DeviceStatus,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorMap {
    pub building: String,
    pub floor: String,
    pub map_image: String,
    pub markers: Vec<EventMarker>,
    pub devices: Vec<DeviceMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MapView {
    /// Building and floor must both be selected (and exist) first.
    SelectionRequired,
    Floor(FloorMap),
}

/// Project `events` (already filtered) onto the selected floor.
///
/// Events without coordinates are not drawn.
pub fn project_map(
    events: &[Arc<SecurityEvent>],
    topology: &Topology,
    building_id: Option<&str>,
    floor_id: Option<&str>,
) -> MapView {
    let (Some(building_id), Some(floor_id)) = (building_id, floor_id) else {
        return MapView::SelectionRequired;
    };
    let Some((building, floor)) = topology.floor(building_id, floor_id) else {
        return MapView::SelectionRequired;
    };

    let markers = events
        .iter()
        .filter(|e| e.building == building.name && e.floor == floor.name)
        .filter_map(|e| {
            let at = e.coordinates?;
            Some(EventMarker {
                event_id: e.id.clone(),
                label: e.event_type.clone(),
                x: at.x,
                y: at.y,
                priority: e.priority,
                tone: Tone::from(e.priority),
                acknowledged: e.is_acknowledged(),
            })
        })
        .collect();

    let devices = floor
        .devices
        .iter()
        .map(|d| DeviceMarker {
            device_id: d.id.clone(),
            name: d.name.clone(),
            x: d.coordinates.x,
            y: d.coordinates.y,
            status: d.status,
            tone: Tone::from(d.status),
        })
        .collect();

    MapView::Floor(FloorMap {
        building: building.name.clone(),
        floor: floor.name.clone(),
        map_image: floor.map_image.clone(),
        markers,
        devices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinates;
    use crate::testing::{event, topology};

    fn placed(
        id: &str,
        priority: Priority,
        floor: &str,
        at: Option<(f64, f64)>,
    ) -> Arc<SecurityEvent> {
        let mut e = event(id, priority);
        e.floor = floor.into();
        e.coordinates = at.map(|(x, y)| Coordinates { x, y });
        Arc::new(e)
    }

    #[test]
    fn missing_selection_requires_selection() {
        let topo = topology();
        assert_eq!(project_map(&[], &topo, None, None), MapView::SelectionRequired);
        assert_eq!(project_map(&[], &topo, Some("hq"), None), MapView::SelectionRequired);
        assert_eq!(project_map(&[], &topo, None, Some("hq-g")), MapView::SelectionRequired);
    }

    #[test]
    fn unresolved_floor_requires_selection() {
        let topo = topology();
        assert_eq!(
            project_map(&[], &topo, Some("annex"), Some("hq-g")),
            MapView::SelectionRequired
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn places_floor_events_and_devices() {
        let events = vec![
            placed("E1", Priority::Red, "Ground Floor", Some((5.0, 6.0))),
            placed("E2", Priority::Blue, "First Floor", Some((7.0, 8.0))),
            placed("E3", Priority::Amber, "Ground Floor", None),
        ];

        let MapView::Floor(map) = project_map(&events, &topology(), Some("hq"), Some("hq-g")) else {
            panic!("expected a floor map");
        };

        assert_eq!(map.map_image, "maps/hq-g.png");
        assert_eq!(map.markers.len(), 1);
        assert_eq!(map.markers[0].event_id, "E1");
        assert_eq!(map.markers[0].tone, Tone::Red);
        assert_eq!((map.markers[0].x, map.markers[0].y), (5.0, 6.0));

        let device_tones: Vec<_> = map
            .devices
            .iter()
            .map(|d| (d.device_id.as_str(), d.tone))
            .collect();
        assert_eq!(device_tones, [("cam-1", Tone::Green), ("rdr-1", Tone::Amber)]);
    }

    #[test]
    fn offline_devices_are_red() {
        let MapView::Floor(map) = project_map(&[], &topology(), Some("hq"), Some("hq-1")) else {
            panic!("expected a floor map");
        };

        assert!(map.markers.is_empty());
        assert_eq!(map.devices.len(), 1);
        assert_eq!(map.devices[0].device_id, "cam-2");
        assert_eq!(map.devices[0].status, DeviceStatus::Offline);
        assert_eq!(map.devices[0].tone, Tone::Red);
    }
}
