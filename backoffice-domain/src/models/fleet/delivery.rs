use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

use crate::listview::aggregate;
use crate::listview::filter::{contains_ignore_case, Searchable};
use crate::listview::presentation::{BadgeColor, Presentation};
use crate::models::{HasPrimaryKey, Identifiable, Index, IndexAware, Indexable};

/// Delivery lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Planned,
    InTransit,
    Completed,
    Cancelled,
    Unknown,
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryStatus::Planned => write!(f, "Planned"),
            DeliveryStatus::InTransit => write!(f, "InTransit"),
            DeliveryStatus::Completed => write!(f, "Completed"),
            DeliveryStatus::Cancelled => write!(f, "Cancelled"),
            DeliveryStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for DeliveryStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planned" => Ok(DeliveryStatus::Planned),
            "InTransit" => Ok(DeliveryStatus::InTransit),
            "Completed" => Ok(DeliveryStatus::Completed),
            "Cancelled" => Ok(DeliveryStatus::Cancelled),
            _ => Ok(DeliveryStatus::Unknown),
        }
    }
}

impl Presentation for DeliveryStatus {
    fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Planned => "Planned",
            DeliveryStatus::InTransit => "In transit",
            DeliveryStatus::Completed => "Completed",
            DeliveryStatus::Cancelled => "Cancelled",
            DeliveryStatus::Unknown => "Unknown",
        }
    }

    fn badge(&self) -> BadgeColor {
        match self {
            DeliveryStatus::Planned => BadgeColor::Yellow,
            DeliveryStatus::InTransit => BadgeColor::Blue,
            DeliveryStatus::Completed => BadgeColor::Green,
            DeliveryStatus::Cancelled => BadgeColor::Red,
            DeliveryStatus::Unknown => BadgeColor::default(),
        }
    }
}

/// Delivery run assigned to a vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryModel {
    pub id: Uuid,
    pub delivery_number: HeaplessString<20>,
    pub vehicle_id: Option<Uuid>,
    pub destination: HeaplessString<100>,
    pub distance_km: Decimal,
    pub scheduled_on: NaiveDate,
    #[serde(
        serialize_with = "serialize_delivery_status",
        deserialize_with = "deserialize_delivery_status"
    )]
    pub status: DeliveryStatus,
}

impl Identifiable for DeliveryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for DeliveryModel {
    fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(self.delivery_number.as_str(), term)
            || contains_ignore_case(self.destination.as_str(), term)
    }
}

/// Index model for Delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryIdxModel {
    pub id: Uuid,
    pub delivery_number_hash: Option<i64>,
    pub vehicle_id: Option<Uuid>,
}

impl IndexAware for DeliveryModel {
    type IndexType = DeliveryIdxModel;

    fn to_index(&self) -> Self::IndexType {
        let delivery_number_hash =
            crate::utils::hash_as_i64(&self.delivery_number.as_str()).ok();

        DeliveryIdxModel {
            id: self.id,
            delivery_number_hash,
            vehicle_id: self.vehicle_id,
        }
    }
}

impl Identifiable for DeliveryIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for DeliveryIdxModel {}

impl HasPrimaryKey for DeliveryIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl Indexable for DeliveryIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        let mut keys = HashMap::new();
        keys.insert(
            "delivery_number_hash".to_string(),
            self.delivery_number_hash,
        );
        keys
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        let mut keys = HashMap::new();
        keys.insert("vehicle_id".to_string(), self.vehicle_id);
        keys
    }
}

/// Aggregates over the full filtered delivery collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverySummary {
    pub delivery_count: usize,
    pub completed_count: usize,
    pub total_distance_km: Decimal,
    /// Completed deliveries as a percentage of all deliveries
    pub completed_percent: Decimal,
}

impl DeliverySummary {
    pub fn from_deliveries(deliveries: &[DeliveryModel]) -> Self {
        let completed_count = aggregate::count_by(deliveries, |d| {
            d.status == DeliveryStatus::Completed
        });

        DeliverySummary {
            delivery_count: deliveries.len(),
            completed_count,
            total_distance_km: aggregate::sum_by(deliveries, |d| d.distance_km),
            completed_percent: aggregate::percent_of(
                Decimal::from(completed_count),
                Decimal::from(deliveries.len()),
            ),
        }
    }
}

// Serialization functions for DeliveryStatus
fn serialize_delivery_status<S>(status: &DeliveryStatus, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let status_str = match status {
        DeliveryStatus::Planned => "Planned",
        DeliveryStatus::InTransit => "InTransit",
        DeliveryStatus::Completed => "Completed",
        DeliveryStatus::Cancelled => "Cancelled",
        DeliveryStatus::Unknown => "Unknown",
    };
    serializer.serialize_str(status_str)
}

fn deserialize_delivery_status<'de, D>(deserializer: D) -> Result<DeliveryStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(DeliveryStatus::from_str(&s).unwrap_or(DeliveryStatus::Unknown))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery(number: &str, status: DeliveryStatus, distance: i64) -> DeliveryModel {
        DeliveryModel {
            id: Uuid::new_v4(),
            delivery_number: HeaplessString::try_from(number).unwrap(),
            vehicle_id: None,
            destination: HeaplessString::try_from("Warehouse North").unwrap(),
            distance_km: Decimal::from(distance),
            scheduled_on: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
            status,
        }
    }

    #[test]
    fn test_delivery_summary_completed_percent() {
        let deliveries = vec![
            delivery("DLV-001", DeliveryStatus::Completed, 120),
            delivery("DLV-002", DeliveryStatus::Completed, 80),
            delivery("DLV-003", DeliveryStatus::InTransit, 200),
            delivery("DLV-004", DeliveryStatus::Planned, 50),
        ];
        let summary = DeliverySummary::from_deliveries(&deliveries);

        assert_eq!(summary.delivery_count, 4);
        assert_eq!(summary.completed_count, 2);
        assert_eq!(summary.total_distance_km, Decimal::from(450));
        assert_eq!(summary.completed_percent, Decimal::from(50));
    }

    #[test]
    fn test_delivery_summary_empty_has_zero_percent() {
        let summary = DeliverySummary::from_deliveries(&[]);
        assert_eq!(summary.completed_percent, Decimal::ZERO);
    }
}
