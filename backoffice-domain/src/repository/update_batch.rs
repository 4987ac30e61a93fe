use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for updating multiple entities in a batch
///
/// All updates are applied atomically. Updating an entity that does not
/// exist is an error.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl UpdateBatch<ItemModel> for InMemoryRepository<ItemModel> {
///     async fn update_batch(&self, items: Vec<ItemModel>) -> Result<Vec<ItemModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait UpdateBatch<T: Identifiable>: Send + Sync {
    /// Update multiple items atomically
    ///
    /// # Arguments
    /// * `items` - A vector of entities to update
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - A vector of updated entities
    /// * `Err` - An error if any entity is missing; nothing is changed
    async fn update_batch(
        &self,
        items: Vec<T>,
    ) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
