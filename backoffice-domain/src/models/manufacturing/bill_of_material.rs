use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

use crate::listview::filter::{contains_ignore_case, Searchable};
use crate::listview::presentation::{BadgeColor, Presentation};
use crate::models::{HasPrimaryKey, Identifiable, Index, IndexAware, Indexable};

/// BOM release status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BomStatus {
    Draft,
    Released,
    Obsolete,
    Unknown,
}

impl std::fmt::Display for BomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BomStatus::Draft => write!(f, "Draft"),
            BomStatus::Released => write!(f, "Released"),
            BomStatus::Obsolete => write!(f, "Obsolete"),
            BomStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for BomStatus {
    type Err = ();

    /// Unknown keys decode to `Unknown` rather than failing
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(BomStatus::Draft),
            "Released" => Ok(BomStatus::Released),
            "Obsolete" => Ok(BomStatus::Obsolete),
            _ => Ok(BomStatus::Unknown),
        }
    }
}

impl Presentation for BomStatus {
    fn label(&self) -> &'static str {
        match self {
            BomStatus::Draft => "Draft",
            BomStatus::Released => "Released",
            BomStatus::Obsolete => "Obsolete",
            BomStatus::Unknown => "Unknown",
        }
    }

    fn badge(&self) -> BadgeColor {
        match self {
            BomStatus::Draft => BadgeColor::Yellow,
            BomStatus::Released => BadgeColor::Green,
            BomStatus::Obsolete => BadgeColor::Red,
            BomStatus::Unknown => BadgeColor::default(),
        }
    }
}

/// Bill of material header for one finished item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillOfMaterialModel {
    pub id: Uuid,
    pub code: HeaplessString<20>,
    /// References ItemModel.id of the finished product
    pub item_id: Uuid,
    pub version: i32,
    #[serde(
        serialize_with = "serialize_bom_status",
        deserialize_with = "deserialize_bom_status"
    )]
    pub status: BomStatus,
    pub notes: Option<HeaplessString<200>>,
}

impl Identifiable for BillOfMaterialModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for BillOfMaterialModel {
    fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(self.code.as_str(), term)
    }
}

/// Index model for BillOfMaterial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillOfMaterialIdxModel {
    pub id: Uuid,
    pub code_hash: Option<i64>,
    pub item_id: Option<Uuid>,
}

impl IndexAware for BillOfMaterialModel {
    type IndexType = BillOfMaterialIdxModel;

    fn to_index(&self) -> Self::IndexType {
        let code_hash = crate::utils::hash_as_i64(&self.code.as_str()).ok();

        BillOfMaterialIdxModel {
            id: self.id,
            code_hash,
            item_id: Some(self.item_id),
        }
    }
}

impl Identifiable for BillOfMaterialIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for BillOfMaterialIdxModel {}

impl HasPrimaryKey for BillOfMaterialIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl Indexable for BillOfMaterialIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        let mut keys = HashMap::new();
        keys.insert("code_hash".to_string(), self.code_hash);
        keys
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        let mut keys = HashMap::new();
        keys.insert("item_id".to_string(), self.item_id);
        keys
    }
}

/// One component line of a bill of material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomComponentModel {
    pub id: Uuid,
    /// References BillOfMaterialModel.id
    pub bom_id: Uuid,
    /// References ItemModel.id of the consumed component
    pub component_item_id: Uuid,
    /// Quantity consumed per unit of the finished item
    pub quantity: Decimal,
    pub scrap_percent: Decimal,
    pub position: i32,
}

impl Identifiable for BomComponentModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for BomComponentModel {
    fn matches_search(&self, _term: &str) -> bool {
        // Component lines carry no searchable text; views search the parent
        false
    }
}

/// Index model for BomComponent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomComponentIdxModel {
    pub id: Uuid,
    pub bom_id: Option<Uuid>,
    pub component_item_id: Option<Uuid>,
}

impl IndexAware for BomComponentModel {
    type IndexType = BomComponentIdxModel;

    fn to_index(&self) -> Self::IndexType {
        BomComponentIdxModel {
            id: self.id,
            bom_id: Some(self.bom_id),
            component_item_id: Some(self.component_item_id),
        }
    }
}

impl Identifiable for BomComponentIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for BomComponentIdxModel {}

impl HasPrimaryKey for BomComponentIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl Indexable for BomComponentIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        HashMap::new()
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        let mut keys = HashMap::new();
        keys.insert("bom_id".to_string(), self.bom_id);
        keys.insert("component_item_id".to_string(), self.component_item_id);
        keys
    }
}

// Serialization functions for BomStatus
fn serialize_bom_status<S>(status: &BomStatus, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let status_str = match status {
        BomStatus::Draft => "Draft",
        BomStatus::Released => "Released",
        BomStatus::Obsolete => "Obsolete",
        BomStatus::Unknown => "Unknown",
    };
    serializer.serialize_str(status_str)
}

fn deserialize_bom_status<'de, D>(deserializer: D) -> Result<BomStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(BomStatus::from_str(&s).unwrap_or(BomStatus::Unknown))
}
