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

/// Evaluation workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvaluationStatus {
    Draft,
    Submitted,
    Approved,
    Unknown,
}

impl std::fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluationStatus::Draft => write!(f, "Draft"),
            EvaluationStatus::Submitted => write!(f, "Submitted"),
            EvaluationStatus::Approved => write!(f, "Approved"),
            EvaluationStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for EvaluationStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(EvaluationStatus::Draft),
            "Submitted" => Ok(EvaluationStatus::Submitted),
            "Approved" => Ok(EvaluationStatus::Approved),
            _ => Ok(EvaluationStatus::Unknown),
        }
    }
}

impl Presentation for EvaluationStatus {
    fn label(&self) -> &'static str {
        match self {
            EvaluationStatus::Draft => "Draft",
            EvaluationStatus::Submitted => "Submitted",
            EvaluationStatus::Approved => "Approved",
            EvaluationStatus::Unknown => "Unknown",
        }
    }

    fn badge(&self) -> BadgeColor {
        match self {
            EvaluationStatus::Draft => BadgeColor::Yellow,
            EvaluationStatus::Submitted => BadgeColor::Blue,
            EvaluationStatus::Approved => BadgeColor::Green,
            EvaluationStatus::Unknown => BadgeColor::default(),
        }
    }
}

/// Performance evaluation for one employee over one review period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationModel {
    pub id: Uuid,
    pub employee_id: Uuid,
    /// Review period identifier, e.g. "2026-H1"
    pub period: HeaplessString<20>,
    pub reviewer_id: Option<Uuid>,
    #[serde(
        serialize_with = "serialize_evaluation_status",
        deserialize_with = "deserialize_evaluation_status"
    )]
    pub status: EvaluationStatus,
    /// Weighted score across criteria, recomputed on submission
    pub overall_score: Decimal,
}

impl Identifiable for EvaluationModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for EvaluationModel {
    fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(self.period.as_str(), term)
    }
}

/// Index model for Evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationIdxModel {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub period_hash: Option<i64>,
}

impl IndexAware for EvaluationModel {
    type IndexType = EvaluationIdxModel;

    fn to_index(&self) -> Self::IndexType {
        let period_hash = crate::utils::hash_as_i64(&self.period.as_str()).ok();

        EvaluationIdxModel {
            id: self.id,
            employee_id: self.employee_id,
            period_hash,
        }
    }
}

impl Identifiable for EvaluationIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for EvaluationIdxModel {}

impl HasPrimaryKey for EvaluationIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl Indexable for EvaluationIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        let mut keys = HashMap::new();
        keys.insert("period_hash".to_string(), self.period_hash);
        keys
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        let mut keys = HashMap::new();
        keys.insert("employee_id".to_string(), Some(self.employee_id));
        keys
    }
}

/// Scored criterion line within an evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationCriterionModel {
    pub id: Uuid,
    pub evaluation_id: Uuid,
    pub name: HeaplessString<50>,
    /// Relative weight of this criterion within the evaluation
    pub weight: Decimal,
    pub score: Decimal,
}

impl Identifiable for EvaluationCriterionModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for EvaluationCriterionModel {
    fn matches_search(&self, _term: &str) -> bool {
        // views search the parent evaluation
        false
    }
}

/// Index model for EvaluationCriterion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationCriterionIdxModel {
    pub id: Uuid,
    pub evaluation_id: Uuid,
}

impl IndexAware for EvaluationCriterionModel {
    type IndexType = EvaluationCriterionIdxModel;

    fn to_index(&self) -> Self::IndexType {
        EvaluationCriterionIdxModel {
            id: self.id,
            evaluation_id: self.evaluation_id,
        }
    }
}

impl Identifiable for EvaluationCriterionIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for EvaluationCriterionIdxModel {}

impl HasPrimaryKey for EvaluationCriterionIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl Indexable for EvaluationCriterionIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        HashMap::new()
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        let mut keys = HashMap::new();
        keys.insert("evaluation_id".to_string(), Some(self.evaluation_id));
        keys
    }
}

/// Weighted overall score across criteria. Zero total weight yields zero.
pub fn overall_score(criteria: &[EvaluationCriterionModel]) -> Decimal {
    aggregate::weighted_average_by(criteria, |c| c.score, |c| c.weight)
}

/// Aggregates over the full evaluation collection of one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub evaluation_count: usize,
    pub approved_count: usize,
    pub average_score: Decimal,
}

impl EvaluationSummary {
    pub fn from_evaluations(evaluations: &[EvaluationModel]) -> Self {
        EvaluationSummary {
            evaluation_count: evaluations.len(),
            approved_count: aggregate::count_by(evaluations, |e| {
                e.status == EvaluationStatus::Approved
            }),
            average_score: aggregate::average_by(evaluations, |e| e.overall_score),
        }
    }
}

// Serialization functions for EvaluationStatus
fn serialize_evaluation_status<S>(
    status: &EvaluationStatus,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let status_str = match status {
        EvaluationStatus::Draft => "Draft",
        EvaluationStatus::Submitted => "Submitted",
        EvaluationStatus::Approved => "Approved",
        EvaluationStatus::Unknown => "Unknown",
    };
    serializer.serialize_str(status_str)
}

fn deserialize_evaluation_status<'de, D>(deserializer: D) -> Result<EvaluationStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(EvaluationStatus::from_str(&s).unwrap_or(EvaluationStatus::Unknown))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(name: &str, weight: Decimal, score: Decimal) -> EvaluationCriterionModel {
        EvaluationCriterionModel {
            id: Uuid::new_v4(),
            evaluation_id: Uuid::new_v4(),
            name: HeaplessString::try_from(name).unwrap(),
            weight,
            score,
        }
    }

    #[test]
    fn test_overall_score_weighted() {
        let criteria = vec![
            criterion("Quality", Decimal::from(3), Decimal::from(4)),
            criterion("Delivery", Decimal::from(1), Decimal::from(2)),
        ];
        // (3*4 + 1*2) / 4 = 3.5
        assert_eq!(overall_score(&criteria), Decimal::new(35, 1));
    }

    #[test]
    fn test_overall_score_zero_weights() {
        let criteria = vec![criterion("Quality", Decimal::ZERO, Decimal::from(5))];
        assert_eq!(overall_score(&criteria), Decimal::ZERO);
    }

    #[test]
    fn test_evaluation_status_unknown_fallback() {
        let parsed: EvaluationStatus = "Archived".parse().unwrap();
        assert_eq!(parsed, EvaluationStatus::Unknown);
    }
}
