use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

use crate::listview::aggregate::{percent_of, sum_by};
use crate::listview::filter::{contains_ignore_case, Searchable};
use crate::models::{HasPrimaryKey, Identifiable, Index, IndexAware, Indexable};

/// Cost category enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostCategory {
    Labor,
    Materials,
    Equipment,
    Services,
    Other,
}

impl std::fmt::Display for CostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostCategory::Labor => write!(f, "Labor"),
            CostCategory::Materials => write!(f, "Materials"),
            CostCategory::Equipment => write!(f, "Equipment"),
            CostCategory::Services => write!(f, "Services"),
            CostCategory::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for CostCategory {
    type Err = ();

    /// Unknown keys decode to `Other` rather than failing
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Labor" => Ok(CostCategory::Labor),
            "Materials" => Ok(CostCategory::Materials),
            "Equipment" => Ok(CostCategory::Equipment),
            "Services" => Ok(CostCategory::Services),
            _ => Ok(CostCategory::Other),
        }
    }
}

/// One budget line of a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLineModel {
    pub id: Uuid,
    /// References ProjectModel.id
    pub project_id: Uuid,
    #[serde(
        serialize_with = "serialize_cost_category",
        deserialize_with = "deserialize_cost_category"
    )]
    pub cost_category: CostCategory,
    pub description: Option<HeaplessString<200>>,
    pub planned_amount: Decimal,
    pub actual_amount: Decimal,
}

impl BudgetLineModel {
    /// `100 * actual / planned` for this line, 0 when nothing is planned
    pub fn percent_used(&self) -> Decimal {
        percent_of(self.actual_amount, self.planned_amount)
    }
}

impl Identifiable for BudgetLineModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for BudgetLineModel {
    fn matches_search(&self, term: &str) -> bool {
        self.description
            .as_ref()
            .map(|d| contains_ignore_case(d.as_str(), term))
            .unwrap_or(false)
    }
}

/// Index model for BudgetLine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLineIdxModel {
    pub id: Uuid,
    pub project_id: Option<Uuid>,
}

impl IndexAware for BudgetLineModel {
    type IndexType = BudgetLineIdxModel;

    fn to_index(&self) -> Self::IndexType {
        BudgetLineIdxModel {
            id: self.id,
            project_id: Some(self.project_id),
        }
    }
}

impl Identifiable for BudgetLineIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for BudgetLineIdxModel {}

impl HasPrimaryKey for BudgetLineIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl Indexable for BudgetLineIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        HashMap::new()
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        let mut keys = HashMap::new();
        keys.insert("project_id".to_string(), self.project_id);
        keys
    }
}

/// Summary-card figures for a project budget view
///
/// Always computed over the full filtered set of lines; computing these from
/// the visible page would silently turn global totals into per-page ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub line_count: usize,
    pub planned_total: Decimal,
    pub actual_total: Decimal,
    /// `100 * actual / planned`, 0 when nothing is planned
    pub percent_used: Decimal,
}

impl BudgetSummary {
    pub fn from_lines(lines: &[BudgetLineModel]) -> Self {
        let planned_total = sum_by(lines, |line| line.planned_amount);
        let actual_total = sum_by(lines, |line| line.actual_amount);
        Self {
            line_count: lines.len(),
            planned_total,
            actual_total,
            percent_used: percent_of(actual_total, planned_total),
        }
    }
}

// Serialization functions for CostCategory
fn serialize_cost_category<S>(category: &CostCategory, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let category_str = match category {
        CostCategory::Labor => "Labor",
        CostCategory::Materials => "Materials",
        CostCategory::Equipment => "Equipment",
        CostCategory::Services => "Services",
        CostCategory::Other => "Other",
    };
    serializer.serialize_str(category_str)
}

fn deserialize_cost_category<'de, D>(deserializer: D) -> Result<CostCategory, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(CostCategory::from_str(&s).unwrap_or(CostCategory::Other))
}
