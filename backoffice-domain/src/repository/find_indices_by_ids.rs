use async_trait::async_trait;
use uuid::Uuid;

use crate::models::index::Index;

/// Generic repository trait for finding multiple index entities by their IDs
///
/// # Type Parameters
/// * `T` - The index entity type that must implement Index trait
///
/// # Example
/// ```ignore
/// impl FindIndicesByIds<ItemIdxModel> for InMemoryRepository<ItemModel> {
///     async fn find_indices_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ItemIdxModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindIndicesByIds<T: Index>: Send + Sync {
    /// Find multiple index entities by their unique identifiers
    ///
    /// # Arguments
    /// * `ids` - A slice of UUIDs to search for
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - A vector of found index entities (missing entities are not included)
    /// * `Err` - An error if the query could not be executed
    async fn find_indices_by_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
