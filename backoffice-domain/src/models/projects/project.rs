use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::str::FromStr;
use uuid::Uuid;

use crate::listview::filter::{contains_ignore_case, Searchable};
use crate::listview::presentation::{BadgeColor, Presentation};
use crate::models::{HasPrimaryKey, Identifiable, Index, IndexAware, Indexable};

/// Project status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    Active,
    OnHold,
    Completed,
    Unknown,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Planning => write!(f, "Planning"),
            ProjectStatus::Active => write!(f, "Active"),
            ProjectStatus::OnHold => write!(f, "OnHold"),
            ProjectStatus::Completed => write!(f, "Completed"),
            ProjectStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = ();

    /// Unknown keys decode to `Unknown` rather than failing
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planning" => Ok(ProjectStatus::Planning),
            "Active" => Ok(ProjectStatus::Active),
            "OnHold" => Ok(ProjectStatus::OnHold),
            "Completed" => Ok(ProjectStatus::Completed),
            _ => Ok(ProjectStatus::Unknown),
        }
    }
}

impl Presentation for ProjectStatus {
    fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "On hold",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Unknown => "Unknown",
        }
    }

    fn badge(&self) -> BadgeColor {
        match self {
            ProjectStatus::Planning => BadgeColor::Blue,
            ProjectStatus::Active => BadgeColor::Green,
            ProjectStatus::OnHold => BadgeColor::Yellow,
            ProjectStatus::Completed => BadgeColor::Gray,
            ProjectStatus::Unknown => BadgeColor::default(),
        }
    }
}

/// Project with an overall planned budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectModel {
    pub id: Uuid,
    pub code: HeaplessString<20>,
    pub name: HeaplessString<100>,
    #[serde(
        serialize_with = "serialize_project_status",
        deserialize_with = "deserialize_project_status"
    )]
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub planned_budget: Decimal,
}

impl Identifiable for ProjectModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for ProjectModel {
    fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(self.code.as_str(), term)
            || contains_ignore_case(self.name.as_str(), term)
    }
}

/// Index model for Project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectIdxModel {
    pub id: Uuid,
    pub code_hash: Option<i64>,
}

impl IndexAware for ProjectModel {
    type IndexType = ProjectIdxModel;

    fn to_index(&self) -> Self::IndexType {
        let code_hash = crate::utils::hash_as_i64(&self.code.as_str()).ok();

        ProjectIdxModel {
            id: self.id,
            code_hash,
        }
    }
}

impl Identifiable for ProjectIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for ProjectIdxModel {}

impl HasPrimaryKey for ProjectIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl Indexable for ProjectIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        let mut keys = HashMap::new();
        keys.insert("code_hash".to_string(), self.code_hash);
        keys
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        HashMap::new()
    }
}

// Serialization functions for ProjectStatus
fn serialize_project_status<S>(status: &ProjectStatus, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let status_str = match status {
        ProjectStatus::Planning => "Planning",
        ProjectStatus::Active => "Active",
        ProjectStatus::OnHold => "OnHold",
        ProjectStatus::Completed => "Completed",
        ProjectStatus::Unknown => "Unknown",
    };
    serializer.serialize_str(status_str)
}

fn deserialize_project_status<'de, D>(deserializer: D) -> Result<ProjectStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(ProjectStatus::from_str(&s).unwrap_or(ProjectStatus::Unknown))
}
