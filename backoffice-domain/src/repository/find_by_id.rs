use async_trait::async_trait;
use uuid::Uuid;

use crate::models::index::Index;

/// Generic repository trait for finding index entities by their ID
///
/// Returns an Option to handle cases where the entity might not exist.
///
/// # Type Parameters
/// * `T` - The index entity type that must implement Index trait
///
/// # Example
/// ```ignore
/// impl FindById<ItemIdxModel> for InMemoryRepository<ItemModel> {
///     async fn find_by_id(&self, id: Uuid) -> Result<Option<ItemIdxModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindById<T: Index>: Send + Sync {
    /// Find an index entity by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the entity to find
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found index entity
    /// * `Ok(None)` - If the entity does not exist
    /// * `Err` - An error if the query could not be executed
    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
