use chrono::NaiveDate;
use heapless::String as HeaplessString;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

use crate::listview::filter::{contains_ignore_case, Searchable};
use crate::listview::presentation::{BadgeColor, Presentation};
use crate::models::{HasPrimaryKey, Identifiable, Index, IndexAware, Indexable};

/// Onboarding status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnboardingStatus {
    Pending,
    InProgress,
    Completed,
    Unknown,
}

impl std::fmt::Display for OnboardingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OnboardingStatus::Pending => write!(f, "Pending"),
            OnboardingStatus::InProgress => write!(f, "InProgress"),
            OnboardingStatus::Completed => write!(f, "Completed"),
            OnboardingStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for OnboardingStatus {
    type Err = ();

    /// Unknown keys decode to `Unknown` rather than failing
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OnboardingStatus::Pending),
            "InProgress" => Ok(OnboardingStatus::InProgress),
            "Completed" => Ok(OnboardingStatus::Completed),
            _ => Ok(OnboardingStatus::Unknown),
        }
    }
}

impl Presentation for OnboardingStatus {
    fn label(&self) -> &'static str {
        match self {
            OnboardingStatus::Pending => "Pending",
            OnboardingStatus::InProgress => "In progress",
            OnboardingStatus::Completed => "Completed",
            OnboardingStatus::Unknown => "Unknown",
        }
    }

    fn badge(&self) -> BadgeColor {
        match self {
            OnboardingStatus::Pending => BadgeColor::Yellow,
            OnboardingStatus::InProgress => BadgeColor::Blue,
            OnboardingStatus::Completed => BadgeColor::Green,
            OnboardingStatus::Unknown => BadgeColor::default(),
        }
    }
}

/// Employee record used by onboarding and evaluation views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeModel {
    pub id: Uuid,
    pub employee_number: HeaplessString<20>,
    pub display_name: HeaplessString<100>,
    /// Department within the organization
    pub department: Option<HeaplessString<50>>,
    pub hire_date: NaiveDate,
    #[serde(
        serialize_with = "serialize_onboarding_status",
        deserialize_with = "deserialize_onboarding_status"
    )]
    pub onboarding_status: OnboardingStatus,
    pub active: bool,
}

impl Identifiable for EmployeeModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for EmployeeModel {
    fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(self.employee_number.as_str(), term)
            || contains_ignore_case(self.display_name.as_str(), term)
    }
}

/// Index model for Employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeIdxModel {
    pub id: Uuid,
    pub employee_number_hash: Option<i64>,
    pub department_hash: Option<i64>,
}

impl IndexAware for EmployeeModel {
    type IndexType = EmployeeIdxModel;

    fn to_index(&self) -> Self::IndexType {
        let employee_number_hash =
            crate::utils::hash_as_i64(&self.employee_number.as_str()).ok();
        let department_hash = self
            .department
            .as_ref()
            .and_then(|d| crate::utils::hash_as_i64(&d.as_str()).ok());

        EmployeeIdxModel {
            id: self.id,
            employee_number_hash,
            department_hash,
        }
    }
}

impl Identifiable for EmployeeIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for EmployeeIdxModel {}

impl HasPrimaryKey for EmployeeIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl Indexable for EmployeeIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        let mut keys = HashMap::new();
        keys.insert(
            "employee_number_hash".to_string(),
            self.employee_number_hash,
        );
        keys.insert("department_hash".to_string(), self.department_hash);
        keys
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        HashMap::new()
    }
}

// Serialization functions for OnboardingStatus
fn serialize_onboarding_status<S>(
    status: &OnboardingStatus,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let status_str = match status {
        OnboardingStatus::Pending => "Pending",
        OnboardingStatus::InProgress => "InProgress",
        OnboardingStatus::Completed => "Completed",
        OnboardingStatus::Unknown => "Unknown",
    };
    serializer.serialize_str(status_str)
}

fn deserialize_onboarding_status<'de, D>(deserializer: D) -> Result<OnboardingStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(OnboardingStatus::from_str(&s).unwrap_or(OnboardingStatus::Unknown))
}
