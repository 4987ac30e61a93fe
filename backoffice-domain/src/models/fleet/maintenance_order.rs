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

/// Maintenance order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceOrderStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
    Unknown,
}

impl std::fmt::Display for MaintenanceOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaintenanceOrderStatus::Open => write!(f, "Open"),
            MaintenanceOrderStatus::InProgress => write!(f, "InProgress"),
            MaintenanceOrderStatus::Completed => write!(f, "Completed"),
            MaintenanceOrderStatus::Cancelled => write!(f, "Cancelled"),
            MaintenanceOrderStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for MaintenanceOrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(MaintenanceOrderStatus::Open),
            "InProgress" => Ok(MaintenanceOrderStatus::InProgress),
            "Completed" => Ok(MaintenanceOrderStatus::Completed),
            "Cancelled" => Ok(MaintenanceOrderStatus::Cancelled),
            _ => Ok(MaintenanceOrderStatus::Unknown),
        }
    }
}

impl Presentation for MaintenanceOrderStatus {
    fn label(&self) -> &'static str {
        match self {
            MaintenanceOrderStatus::Open => "Open",
            MaintenanceOrderStatus::InProgress => "In progress",
            MaintenanceOrderStatus::Completed => "Completed",
            MaintenanceOrderStatus::Cancelled => "Cancelled",
            MaintenanceOrderStatus::Unknown => "Unknown",
        }
    }

    fn badge(&self) -> BadgeColor {
        match self {
            MaintenanceOrderStatus::Open => BadgeColor::Yellow,
            MaintenanceOrderStatus::InProgress => BadgeColor::Blue,
            MaintenanceOrderStatus::Completed => BadgeColor::Green,
            MaintenanceOrderStatus::Cancelled => BadgeColor::Red,
            MaintenanceOrderStatus::Unknown => BadgeColor::default(),
        }
    }
}

/// Maintenance work order for a vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceOrderModel {
    pub id: Uuid,
    pub order_number: HeaplessString<20>,
    pub vehicle_id: Uuid,
    pub description: HeaplessString<200>,
    pub cost: Decimal,
    pub opened_on: NaiveDate,
    pub closed_on: Option<NaiveDate>,
    #[serde(
        serialize_with = "serialize_maintenance_order_status",
        deserialize_with = "deserialize_maintenance_order_status"
    )]
    pub status: MaintenanceOrderStatus,
}

impl Identifiable for MaintenanceOrderModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for MaintenanceOrderModel {
    fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(self.order_number.as_str(), term)
            || contains_ignore_case(self.description.as_str(), term)
    }
}

/// Index model for MaintenanceOrder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceOrderIdxModel {
    pub id: Uuid,
    pub order_number_hash: Option<i64>,
    pub vehicle_id: Uuid,
}

impl IndexAware for MaintenanceOrderModel {
    type IndexType = MaintenanceOrderIdxModel;

    fn to_index(&self) -> Self::IndexType {
        let order_number_hash = crate::utils::hash_as_i64(&self.order_number.as_str()).ok();

        MaintenanceOrderIdxModel {
            id: self.id,
            order_number_hash,
            vehicle_id: self.vehicle_id,
        }
    }
}

impl Identifiable for MaintenanceOrderIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for MaintenanceOrderIdxModel {}

impl HasPrimaryKey for MaintenanceOrderIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl Indexable for MaintenanceOrderIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        let mut keys = HashMap::new();
        keys.insert("order_number_hash".to_string(), self.order_number_hash);
        keys
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        let mut keys = HashMap::new();
        keys.insert("vehicle_id".to_string(), Some(self.vehicle_id));
        keys
    }
}

/// Aggregates over the full filtered maintenance order collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceSummary {
    pub order_count: usize,
    pub open_count: usize,
    pub total_cost: Decimal,
}

impl MaintenanceSummary {
    pub fn from_orders(orders: &[MaintenanceOrderModel]) -> Self {
        MaintenanceSummary {
            order_count: orders.len(),
            open_count: aggregate::count_by(orders, |o| {
                matches!(
                    o.status,
                    MaintenanceOrderStatus::Open | MaintenanceOrderStatus::InProgress
                )
            }),
            total_cost: aggregate::sum_by(orders, |o| o.cost),
        }
    }
}

// Serialization functions for MaintenanceOrderStatus
fn serialize_maintenance_order_status<S>(
    status: &MaintenanceOrderStatus,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let status_str = match status {
        MaintenanceOrderStatus::Open => "Open",
        MaintenanceOrderStatus::InProgress => "InProgress",
        MaintenanceOrderStatus::Completed => "Completed",
        MaintenanceOrderStatus::Cancelled => "Cancelled",
        MaintenanceOrderStatus::Unknown => "Unknown",
    };
    serializer.serialize_str(status_str)
}

fn deserialize_maintenance_order_status<'de, D>(
    deserializer: D,
) -> Result<MaintenanceOrderStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(MaintenanceOrderStatus::from_str(&s).unwrap_or(MaintenanceOrderStatus::Unknown))
}
