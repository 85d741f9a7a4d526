// Shared fixtures for unit tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{
    AccessZone, Building, Coordinates, Device, DeviceStatus, Floor, Priority, SecurityEvent,
    Topology,
};

pub(crate) fn ts(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 8, minute, 0)
        .single()
        .unwrap_or_default()
}

pub(crate) fn event(id: &str, priority: Priority) -> SecurityEvent {
    SecurityEvent {
        id: id.to_owned(),
        event_date: ts(0),
        priority,
        event_type: "Access Denied".into(),
        device_name: "Reader".into(),
        location: "Lobby".into(),
        building: "Headquarters".into(),
        floor: "Ground Floor".into(),
        description: String::new(),
        acknowledgement: None,
        coordinates: None,
    }
}

pub(crate) fn topology() -> Topology {
    Topology::new(vec![
        Building {
            id: "hq".into(),
            name: "Headquarters".into(),
            floors: vec![
                Floor {
                    id: "hq-g".into(),
                    name: "Ground Floor".into(),
                    map_image: "maps/hq-g.png".into(),
                    devices: vec![
                        Device {
                            id: "cam-1".into(),
                            name: "Lobby Camera".into(),
                            device_type: "camera".into(),
                            status: DeviceStatus::Online,
                            coordinates: Coordinates { x: 10.0, y: 20.0 },
                        },
                        Device {
                            id: "rdr-1".into(),
                            name: "Lobby Reader".into(),
                            device_type: "reader".into(),
                            status: DeviceStatus::Maintenance,
                            coordinates: Coordinates { x: 30.0, y: 40.0 },
                        },
                    ],
                },
                Floor {
                    id: "hq-1".into(),
                    name: "First Floor".into(),
                    map_image: "maps/hq-1.png".into(),
                    devices: vec![Device {
                        id: "cam-2".into(),
                        name: "Corridor Camera".into(),
                        device_type: "camera".into(),
                        status: DeviceStatus::Offline,
                        coordinates: Coordinates { x: 50.0, y: 60.0 },
                    }],
                },
            ],
        },
        Building {
            id: "annex".into(),
            name: "Annex".into(),
            floors: vec![Floor {
                id: "annex-g".into(),
                name: "Ground Floor".into(),
                map_image: "maps/annex-g.png".into(),
                devices: vec![],
            }],
        },
    ])
}

pub(crate) fn zones() -> Vec<AccessZone> {
    vec![
        AccessZone {
            id: "z-lobby".into(),
            name: "Lobby".into(),
            building: "Headquarters".into(),
            floor: "Ground Floor".into(),
            requires_escort: false,
        },
        AccessZone {
            id: "z-server".into(),
            name: "Server Room".into(),
            building: "Headquarters".into(),
            floor: "First Floor".into(),
            requires_escort: true,
        },
        AccessZone {
            id: "z-lab".into(),
            name: "Research Lab".into(),
            building: "Annex".into(),
            floor: "Ground Floor".into(),
            requires_escort: true,
        },
    ]
}
