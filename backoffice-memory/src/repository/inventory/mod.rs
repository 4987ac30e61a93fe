pub mod category_repository;
pub mod factory;
pub mod item_repository;

#[cfg(test)]
pub mod test_utils;

pub use category_repository::CategoryRepository;
pub use factory::{InventoryRepoFactory, InventoryRepositories};
pub use item_repository::ItemRepository;
