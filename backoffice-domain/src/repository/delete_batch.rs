use async_trait::async_trait;
use uuid::Uuid;

/// Generic repository trait for deleting multiple entities by their IDs
///
/// IDs that do not exist are skipped; the returned count only covers
/// entities that were actually removed.
///
/// # Example
/// ```ignore
/// impl DeleteBatch for InMemoryRepository<ItemModel> {
///     async fn delete_batch(&self, ids: &[Uuid]) -> Result<usize, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait DeleteBatch: Send + Sync {
    /// Delete multiple items by their IDs
    ///
    /// # Arguments
    /// * `ids` - A slice of UUIDs of the entities to delete
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of items successfully deleted
    /// * `Err` - An error if the operation could not be executed
    async fn delete_batch(
        &self,
        ids: &[Uuid],
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
