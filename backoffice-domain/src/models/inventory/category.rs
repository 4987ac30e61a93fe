use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::listview::filter::{contains_ignore_case, Searchable};
use crate::models::{HasPrimaryKey, Identifiable, Index, IndexAware, Indexable};

/// Inventory category, optionally nested under a parent category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryModel {
    pub id: Uuid,
    pub code: HeaplessString<20>,
    pub name: HeaplessString<100>,
    pub description: Option<HeaplessString<200>>,
    /// References CategoryModel.id for the category tree
    pub parent_category_id: Option<Uuid>,
    pub active: bool,
}

impl Identifiable for CategoryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Searchable for CategoryModel {
    fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(self.code.as_str(), term)
            || contains_ignore_case(self.name.as_str(), term)
    }
}

/// Index model for Category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryIdxModel {
    pub id: Uuid,
    pub code_hash: Option<i64>,
    pub parent_category_id: Option<Uuid>,
}

impl IndexAware for CategoryModel {
    type IndexType = CategoryIdxModel;

    fn to_index(&self) -> Self::IndexType {
        let code_hash = crate::utils::hash_as_i64(&self.code.as_str()).ok();

        CategoryIdxModel {
            id: self.id,
            code_hash,
            parent_category_id: self.parent_category_id,
        }
    }
}

impl Identifiable for CategoryIdxModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Index for CategoryIdxModel {}

impl HasPrimaryKey for CategoryIdxModel {
    fn primary_key(&self) -> Uuid {
        self.id
    }
}

impl Indexable for CategoryIdxModel {
    fn i64_keys(&self) -> HashMap<String, Option<i64>> {
        let mut keys = HashMap::new();
        keys.insert("code_hash".to_string(), self.code_hash);
        keys
    }

    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
        let mut keys = HashMap::new();
        keys.insert("parent_category_id".to_string(), self.parent_category_id);
        keys
    }
}
