use std::sync::Arc;

use super::{CategoryRepository, ItemRepository};

/// Factory for creating inventory module repositories
///
/// Holds the singleton stores for the inventory module. All repositories
/// handed out share the same underlying data.
pub struct InventoryRepoFactory {
    category_repository: Arc<CategoryRepository>,
    item_repository: Arc<ItemRepository>,
}

impl InventoryRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            category_repository: Arc::new(CategoryRepository::new()),
            item_repository: Arc::new(ItemRepository::new()),
        })
    }

    pub fn category_repo(&self) -> Arc<CategoryRepository> {
        self.category_repository.clone()
    }

    pub fn item_repo(&self) -> Arc<ItemRepository> {
        self.item_repository.clone()
    }

    /// Build the full set of inventory repositories
    pub fn build_all_repos(&self) -> InventoryRepositories {
        InventoryRepositories {
            category_repository: self.category_repo(),
            item_repository: self.item_repo(),
        }
    }
}

/// Container for all inventory module repositories
pub struct InventoryRepositories {
    pub category_repository: Arc<CategoryRepository>,
    pub item_repository: Arc<ItemRepository>,
}
