use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

use crate::listview::aggregate::{count_by, sum_by};
use crate::listview::filter::{contains_ignore_case, Searchable};
use crate::listview::presentation::{BadgeColor, Presentation};
use crate::models::{HasPrimaryKey, Identifiable, Index, IndexAware, Indexable};

/// Item lifecycle status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    Active,
    Inactive,
    Discontinued,
    Unknown,
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemStatus::Active => write!(f, "Active"),
            ItemStatus::Inactive => write!(f, "Inactive"),
            ItemStatus::Discontinued => write!(f, "Discontinued"),
            ItemStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for ItemStatus {
    type Err = ();

    /// Unknown keys decode to `Unknown` rather than failing
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(ItemStatus::Active),
            "Inactive" => Ok(ItemStatus::Inactive),
            "Discontinued" => Ok(ItemStatus::Discontinued),
            _ => Ok(ItemStatus::Unknown),
        }
    }
}

impl Presentation for ItemStatus {
    fn label(&self) -> &'static str {
        match self {
            ItemStatus::Active => "Active",
            ItemStatus::Inactive => "Inactive",
            ItemStatus::Discontinued => "Discontinued",
            ItemStatus::Unknown => "Unknown",
        }
    }

    fn badge(&self) -> BadgeColor {
        match self {
            ItemStatus::Active => BadgeColor::Green,
            ItemStatus::Inactive => BadgeColor::Yellow,
            ItemStatus::Discontinued => BadgeColor::Red,
            ItemStatus::Unknown => BadgeColor::default(),
        }
    }
}

/// Inventory item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemModel {
    pub id: Uuid,
    pub sku: HeaplessString<30>,
    pub name: HeaplessString<100>,
    pub description: Option<HeaplessString<200>>,
    /// References CategoryModel.id
    pub category_id: Option<Uuid>,
    pub unit_price: Decimal,
    pub quantity_on_hand: i64,
    /// Stock at or below this level counts as low stock
    pub reorder_level: i64,
    #[serde(
        serialize_with = "serialize_item_status",
        deserialize_with = "deserialize_item_status"
    )]
    pub status: ItemStatus,
}

impl ItemModel {
    /// Current stock value of this item
    pub fn stock_value(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity_on_hand)
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity_on_hand <= self.reorder_level
    }
}

impl Identifiable for ItemModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for ItemModel {
    fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(self.sku.as_str(), term)
            || contains_ignore_case(self.name.as_str(), term)
    }
}

/// Index model for Item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemIdxModel {
    pub id: Uuid,
    pub sku_hash: Option<i64>,
    pub category_id: Option<Uuid>,
}

impl IndexAware for ItemModel {
    type IndexType = ItemIdxModel;

    fn to_index(&self) -> Self::IndexType {
        let sku_hash = crate::utils::hash_as_i64(&self.sku.as_str()).ok();

        ItemIdxModel {
            id: self.id,
            sku_hash,
            category_id: self.category_id,
        }
    }
}

impl Identifiable for ItemIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for ItemIdxModel {}

impl HasPrimaryKey for ItemIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl Indexable for ItemIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        let mut keys = HashMap::new();
        keys.insert("sku_hash".to_string(), self.sku_hash);
        keys
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        let mut keys = HashMap::new();
        keys.insert("category_id".to_string(), self.category_id);
        keys
    }
}

/// Summary-card figures for an inventory list view
///
/// Computed from the full filtered collection, never the paginated slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub item_count: usize,
    pub stock_value: Decimal,
    pub low_stock_count: usize,
}

impl InventorySummary {
    pub fn from_items(items: &[ItemModel]) -> Self {
        Self {
            item_count: items.len(),
            stock_value: sum_by(items, ItemModel::stock_value),
            low_stock_count: count_by(items, ItemModel::is_low_stock),
        }
    }
}

// Serialization functions for ItemStatus
fn serialize_item_status<S>(status: &ItemStatus, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let status_str = match status {
        ItemStatus::Active => "Active",
        ItemStatus::Inactive => "Inactive",
        ItemStatus::Discontinued => "Discontinued",
        ItemStatus::Unknown => "Unknown",
    };
    serializer.serialize_str(status_str)
}

fn deserialize_item_status<'de, D>(deserializer: D) -> Result<ItemStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(ItemStatus::from_str(&s).unwrap_or(ItemStatus::Unknown))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(sku: &str, name: &str, price: i64, qty: i64, reorder: i64) -> ItemModel {
        ItemModel {
            id: Uuid::new_v4(),
            sku: HeaplessString::try_from(sku).unwrap(),
            name: HeaplessString::try_from(name).unwrap(),
            description: None,
            category_id: None,
            unit_price: Decimal::from(price),
            quantity_on_hand: qty,
            reorder_level: reorder,
            status: ItemStatus::Active,
        }
    }

    #[test]
    fn summary_is_computed_over_the_whole_collection() {
        let items = vec![
            item("SKU-1", "Steel bolt", 2, 100, 20),
            item("SKU-2", "Brass nut", 3, 10, 20),
            item("SKU-3", "Washer", 1, 0, 5),
        ];

        let summary = InventorySummary::from_items(&items);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.stock_value, Decimal::from(230));
        assert_eq!(summary.low_stock_count, 2);
    }

    #[test]
    fn unknown_status_key_decodes_to_unknown() {
        let status: ItemStatus = "Archived".parse().unwrap();
        assert_eq!(status, ItemStatus::Unknown);
        assert_eq!(status.badge(), BadgeColor::Gray);
    }

    #[test]
    fn item_round_trips_through_json() {
        let original = item("SKU-9", "Hex key", 5, 40, 10);
        let json = serde_json::to_string(&original).unwrap();
        let back: ItemModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sku, original.sku);
        assert_eq!(back.status, original.status);
        assert_eq!(back.unit_price, original.unit_price);
    }

    #[test]
    fn index_carries_sku_hash_and_category() {
        let category_id = Uuid::new_v4();
        let mut record = item("SKU-5", "Spring", 4, 8, 2);
        record.category_id = Some(category_id);

        let idx = record.to_index();
        assert_eq!(idx.id, record.id);
        assert!(idx.sku_hash.is_some());
        assert_eq!(idx.category_id, Some(category_id));
    }
}
