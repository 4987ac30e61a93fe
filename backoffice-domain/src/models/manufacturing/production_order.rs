use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

use crate::listview::aggregate::{percent_of, sum_by};
use crate::listview::filter::{contains_ignore_case, Searchable};
use crate::listview::presentation::{BadgeColor, Presentation};
use crate::models::{HasPrimaryKey, Identifiable, Index, IndexAware, Indexable};

/// Production order status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductionOrderStatus {
    Planned,
    Released,
    InProgress,
    Completed,
    Cancelled,
    Unknown,
}

impl std::fmt::Display for ProductionOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductionOrderStatus::Planned => write!(f, "Planned"),
            ProductionOrderStatus::Released => write!(f, "Released"),
            ProductionOrderStatus::InProgress => write!(f, "InProgress"),
            ProductionOrderStatus::Completed => write!(f, "Completed"),
            ProductionOrderStatus::Cancelled => write!(f, "Cancelled"),
            ProductionOrderStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for ProductionOrderStatus {
    type Err = ();

    /// Unknown keys decode to `Unknown` rather than failing
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planned" => Ok(ProductionOrderStatus::Planned),
            "Released" => Ok(ProductionOrderStatus::Released),
            "InProgress" => Ok(ProductionOrderStatus::InProgress),
            "Completed" => Ok(ProductionOrderStatus::Completed),
            "Cancelled" => Ok(ProductionOrderStatus::Cancelled),
            _ => Ok(ProductionOrderStatus::Unknown),
        }
    }
}

impl Presentation for ProductionOrderStatus {
    fn label(&self) -> &'static str {
        match self {
            ProductionOrderStatus::Planned => "Planned",
            ProductionOrderStatus::Released => "Released",
            ProductionOrderStatus::InProgress => "In progress",
            ProductionOrderStatus::Completed => "Completed",
            ProductionOrderStatus::Cancelled => "Cancelled",
            ProductionOrderStatus::Unknown => "Unknown",
        }
    }

    fn badge(&self) -> BadgeColor {
        match self {
            ProductionOrderStatus::Planned => BadgeColor::Blue,
            ProductionOrderStatus::Released => BadgeColor::Yellow,
            ProductionOrderStatus::InProgress => BadgeColor::Yellow,
            ProductionOrderStatus::Completed => BadgeColor::Green,
            ProductionOrderStatus::Cancelled => BadgeColor::Red,
            ProductionOrderStatus::Unknown => BadgeColor::default(),
        }
    }
}

/// Production order planning one run of a bill of material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionOrderModel {
    pub id: Uuid,
    pub order_number: HeaplessString<20>,
    /// References ItemModel.id of the finished product
    pub item_id: Uuid,
    /// References BillOfMaterialModel.id, None for ad hoc orders
    pub bom_id: Option<Uuid>,
    pub quantity_planned: Decimal,
    pub quantity_produced: Decimal,
    #[serde(
        serialize_with = "serialize_production_order_status",
        deserialize_with = "deserialize_production_order_status"
    )]
    pub status: ProductionOrderStatus,
    pub scheduled_start: NaiveDate,
    pub scheduled_end: Option<NaiveDate>,
}

impl Identifiable for ProductionOrderModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for ProductionOrderModel {
    fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(self.order_number.as_str(), term)
    }
}

/// Index model for ProductionOrder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionOrderIdxModel {
    pub id: Uuid,
    pub order_number_hash: Option<i64>,
    pub item_id: Option<Uuid>,
    pub bom_id: Option<Uuid>,
}

impl IndexAware for ProductionOrderModel {
    type IndexType = ProductionOrderIdxModel;

    fn to_index(&self) -> Self::IndexType {
        let order_number_hash = crate::utils::hash_as_i64(&self.order_number.as_str()).ok();

        ProductionOrderIdxModel {
            id: self.id,
            order_number_hash,
            item_id: Some(self.item_id),
            bom_id: self.bom_id,
        }
    }
}

impl Identifiable for ProductionOrderIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for ProductionOrderIdxModel {}

impl HasPrimaryKey for ProductionOrderIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl Indexable for ProductionOrderIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        let mut keys = HashMap::new();
        keys.insert("order_number_hash".to_string(), self.order_number_hash);
        keys
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        let mut keys = HashMap::new();
        keys.insert("item_id".to_string(), self.item_id);
        keys.insert("bom_id".to_string(), self.bom_id);
        keys
    }
}

/// Summary-card figures for a production order list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionSummary {
    pub order_count: usize,
    pub quantity_planned: Decimal,
    pub quantity_produced: Decimal,
    /// `100 * produced / planned`, 0 when nothing is planned
    pub completion_percent: Decimal,
}

impl ProductionSummary {
    pub fn from_orders(orders: &[ProductionOrderModel]) -> Self {
        let quantity_planned = sum_by(orders, |order| order.quantity_planned);
        let quantity_produced = sum_by(orders, |order| order.quantity_produced);
        Self {
            order_count: orders.len(),
            quantity_planned,
            quantity_produced,
            completion_percent: percent_of(quantity_produced, quantity_planned),
        }
    }
}

// Serialization functions for ProductionOrderStatus
fn serialize_production_order_status<S>(
    status: &ProductionOrderStatus,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let status_str = match status {
        ProductionOrderStatus::Planned => "Planned",
        ProductionOrderStatus::Released => "Released",
        ProductionOrderStatus::InProgress => "InProgress",
        ProductionOrderStatus::Completed => "Completed",
        ProductionOrderStatus::Cancelled => "Cancelled",
        ProductionOrderStatus::Unknown => "Unknown",
    };
    serializer.serialize_str(status_str)
}

fn deserialize_production_order_status<'de, D>(
    deserializer: D,
) -> Result<ProductionOrderStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(ProductionOrderStatus::from_str(&s).unwrap_or(ProductionOrderStatus::Unknown))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(planned: i64, produced: i64) -> ProductionOrderModel {
        ProductionOrderModel {
            id: Uuid::new_v4(),
            order_number: HeaplessString::try_from("PO-0001").unwrap(),
            item_id: Uuid::new_v4(),
            bom_id: None,
            quantity_planned: Decimal::from(planned),
            quantity_produced: Decimal::from(produced),
            status: ProductionOrderStatus::InProgress,
            scheduled_start: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            scheduled_end: None,
        }
    }

    #[test]
    fn completion_percent_over_all_orders() {
        let orders = vec![order(100, 40), order(100, 10)];
        let summary = ProductionSummary::from_orders(&orders);
        assert_eq!(summary.order_count, 2);
        assert_eq!(summary.quantity_planned, Decimal::from(200));
        assert_eq!(summary.quantity_produced, Decimal::from(50));
        assert_eq!(summary.completion_percent, Decimal::from(25));
    }

    #[test]
    fn completion_percent_is_zero_when_nothing_planned() {
        let summary = ProductionSummary::from_orders(&[]);
        assert_eq!(summary.completion_percent, Decimal::ZERO);
    }
}
