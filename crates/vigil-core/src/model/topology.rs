// ── Static site topology ──
//
// Buildings own ordered floors; floors own a map image and the devices
// placed on it. None of this changes during a session.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::event::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DeviceStatus {
    Online,
    Offline,
    Maintenance,
}

/// A fixed piece of hardware drawn on a floor map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub device_type: String,
    pub status: DeviceStatus,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: String,
    pub name: String,
    /// Reference to the floor plan image (path or URL), opaque to the core.
    #[serde(default)]
    pub map_image: String,
    #[serde(default)]
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub floors: Vec<Floor>,
}

impl Building {
    pub fn floor(&self, floor_id: &str) -> Option<&Floor> {
        self.floors.iter().find(|f| f.id == floor_id)
    }
}

/// The full set of buildings, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topology {
    pub buildings: Vec<Building>,
}

impl Topology {
    pub fn new(buildings: Vec<Building>) -> Self {
        Self { buildings }
    }

    pub fn building(&self, building_id: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == building_id)
    }

    /// Resolve a building/floor id pair to both records.
    pub fn floor(&self, building_id: &str, floor_id: &str) -> Option<(&Building, &Floor)> {
        let building = self.building(building_id)?;
        building.floor(floor_id).map(|floor| (building, floor))
    }
}
