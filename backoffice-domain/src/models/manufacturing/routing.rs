use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

use crate::listview::aggregate::sum_by;
use crate::listview::filter::{contains_ignore_case, Searchable};
use crate::models::{HasPrimaryKey, Identifiable, Index, IndexAware, Indexable};

/// Work center enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkCenter {
    Assembly,
    Machining,
    Packaging,
    QualityControl,
    Unknown,
}

impl std::fmt::Display for WorkCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkCenter::Assembly => write!(f, "Assembly"),
            WorkCenter::Machining => write!(f, "Machining"),
            WorkCenter::Packaging => write!(f, "Packaging"),
            WorkCenter::QualityControl => write!(f, "QualityControl"),
            WorkCenter::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for WorkCenter {
    type Err = ();

    /// Unknown keys decode to `Unknown` rather than failing
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Assembly" => Ok(WorkCenter::Assembly),
            "Machining" => Ok(WorkCenter::Machining),
            "Packaging" => Ok(WorkCenter::Packaging),
            "QualityControl" => Ok(WorkCenter::QualityControl),
            _ => Ok(WorkCenter::Unknown),
        }
    }
}

/// One operation in the routing of a bill of material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingOperationModel {
    pub id: Uuid,
    /// References BillOfMaterialModel.id
    pub bom_id: Uuid,
    /// Execution order within the routing
    pub sequence: i32,
    #[serde(
        serialize_with = "serialize_work_center",
        deserialize_with = "deserialize_work_center"
    )]
    pub work_center: WorkCenter,
    pub setup_minutes: i32,
    pub run_minutes_per_unit: Decimal,
    pub description: Option<HeaplessString<200>>,
}

impl Identifiable for RoutingOperationModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for RoutingOperationModel {
    fn matches_search(&self, term: &str) -> bool {
        self.description
            .as_ref()
            .map(|d| contains_ignore_case(d.as_str(), term))
            .unwrap_or(false)
    }
}

/// Index model for RoutingOperation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingOperationIdxModel {
    pub id: Uuid,
    pub bom_id: Option<Uuid>,
}

impl IndexAware for RoutingOperationModel {
    type IndexType = RoutingOperationIdxModel;

    fn to_index(&self) -> Self::IndexType {
        RoutingOperationIdxModel {
            id: self.id,
            bom_id: Some(self.bom_id),
        }
    }
}

impl Identifiable for RoutingOperationIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for RoutingOperationIdxModel {}

impl HasPrimaryKey for RoutingOperationIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl Indexable for RoutingOperationIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        HashMap::new()
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        let mut keys = HashMap::new();
        keys.insert("bom_id".to_string(), self.bom_id);
        keys
    }
}

/// Summary-card figures for a routing list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingSummary {
    pub operation_count: usize,
    pub total_setup_minutes: i64,
    pub run_minutes_per_unit: Decimal,
}

impl RoutingSummary {
    pub fn from_operations(operations: &[RoutingOperationModel]) -> Self {
        Self {
            operation_count: operations.len(),
            total_setup_minutes: operations.iter().map(|op| op.setup_minutes as i64).sum(),
            run_minutes_per_unit: sum_by(operations, |op| op.run_minutes_per_unit),
        }
    }
}

// Serialization functions for WorkCenter
fn serialize_work_center<S>(work_center: &WorkCenter, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let center_str = match work_center {
        WorkCenter::Assembly => "Assembly",
        WorkCenter::Machining => "Machining",
        WorkCenter::Packaging => "Packaging",
        WorkCenter::QualityControl => "QualityControl",
        WorkCenter::Unknown => "Unknown",
    };
    serializer.serialize_str(center_str)
}

fn deserialize_work_center<'de, D>(deserializer: D) -> Result<WorkCenter, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(WorkCenter::from_str(&s).unwrap_or(WorkCenter::Unknown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_summary_totals_setup_and_run_time() {
        let bom_id = Uuid::new_v4();
        let operations: Vec<RoutingOperationModel> = [(10, 15, 2), (20, 5, 1), (30, 10, 3)]
            .into_iter()
            .map(|(sequence, setup, run)| RoutingOperationModel {
                id: Uuid::new_v4(),
                bom_id,
                sequence,
                work_center: WorkCenter::Assembly,
                setup_minutes: setup,
                run_minutes_per_unit: Decimal::from(run),
                description: None,
            })
            .collect();

        let summary = RoutingSummary::from_operations(&operations);
        assert_eq!(summary.operation_count, 3);
        assert_eq!(summary.total_setup_minutes, 30);
        assert_eq!(summary.run_minutes_per_unit, Decimal::from(6));
    }
}
