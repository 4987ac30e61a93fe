use heapless::String as HeaplessString;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

use crate::listview::filter::{contains_ignore_case, Searchable};
use crate::listview::presentation::{BadgeColor, Presentation};
use crate::models::{HasPrimaryKey, Identifiable, Index, IndexAware, Indexable};

/// Vehicle availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    Available,
    InService,
    InMaintenance,
    Retired,
    Unknown,
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleStatus::Available => write!(f, "Available"),
            VehicleStatus::InService => write!(f, "InService"),
            VehicleStatus::InMaintenance => write!(f, "InMaintenance"),
            VehicleStatus::Retired => write!(f, "Retired"),
            VehicleStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for VehicleStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(VehicleStatus::Available),
            "InService" => Ok(VehicleStatus::InService),
            "InMaintenance" => Ok(VehicleStatus::InMaintenance),
            "Retired" => Ok(VehicleStatus::Retired),
            _ => Ok(VehicleStatus::Unknown),
        }
    }
}

impl Presentation for VehicleStatus {
    fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::InService => "In service",
            VehicleStatus::InMaintenance => "In maintenance",
            VehicleStatus::Retired => "Retired",
            VehicleStatus::Unknown => "Unknown",
        }
    }

    fn badge(&self) -> BadgeColor {
        match self {
            VehicleStatus::Available => BadgeColor::Green,
            VehicleStatus::InService => BadgeColor::Blue,
            VehicleStatus::InMaintenance => BadgeColor::Yellow,
            VehicleStatus::Retired => BadgeColor::Red,
            VehicleStatus::Unknown => BadgeColor::default(),
        }
    }
}

/// Fleet vehicle record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleModel {
    pub id: Uuid,
    pub registration_plate: HeaplessString<20>,
    pub make_model: HeaplessString<100>,
    #[serde(
        serialize_with = "serialize_vehicle_status",
        deserialize_with = "deserialize_vehicle_status"
    )]
    pub status: VehicleStatus,
    /// Latest recorded odometer reading in kilometers
    pub odometer_km: u32,
}

impl Identifiable for VehicleModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for VehicleModel {
    fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(self.registration_plate.as_str(), term)
            || contains_ignore_case(self.make_model.as_str(), term)
    }
}

/// Index model for Vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleIdxModel {
    pub id: Uuid,
    pub registration_plate_hash: Option<i64>,
}

impl IndexAware for VehicleModel {
    type IndexType = VehicleIdxModel;

    fn to_index(&self) -> Self::IndexType {
        let registration_plate_hash =
            crate::utils::hash_as_i64(&self.registration_plate.as_str()).ok();

        VehicleIdxModel {
            id: self.id,
            registration_plate_hash,
        }
    }
}

impl Identifiable for VehicleIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for VehicleIdxModel {}

impl HasPrimaryKey for VehicleIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl Indexable for VehicleIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        let mut keys = HashMap::new();
        keys.insert(
            "registration_plate_hash".to_string(),
            self.registration_plate_hash,
        );
        keys
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        HashMap::new()
    }
}

// Serialization functions for VehicleStatus
fn serialize_vehicle_status<S>(status: &VehicleStatus, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let status_str = match status {
        VehicleStatus::Available => "Available",
        VehicleStatus::InService => "InService",
        VehicleStatus::InMaintenance => "InMaintenance",
        VehicleStatus::Retired => "Retired",
        VehicleStatus::Unknown => "Unknown",
    };
    serializer.serialize_str(status_str)
}

fn deserialize_vehicle_status<'de, D>(deserializer: D) -> Result<VehicleStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(VehicleStatus::from_str(&s).unwrap_or(VehicleStatus::Unknown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_status_unknown_fallback() {
        let parsed: VehicleStatus = "Scrapped".parse().unwrap();
        assert_eq!(parsed, VehicleStatus::Unknown);
        assert_eq!(parsed.badge(), BadgeColor::Gray);
    }
}
