use async_trait::async_trait;
use uuid::Uuid;

/// Generic repository trait for checking existence of entities by their IDs
///
/// # Example
/// ```ignore
/// impl ExistByIds for InMemoryRepository<ItemModel> {
///     async fn exist_by_ids(&self, ids: &[Uuid]) -> Result<Vec<(Uuid, bool)>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait ExistByIds: Send + Sync {
    /// Check existence of multiple entities by their unique identifiers
    ///
    /// # Arguments
    /// * `ids` - A slice of UUIDs to check
    ///
    /// # Returns
    /// * `Ok(Vec<(Uuid, bool)>)` - A vector of tuples mapping each ID to its existence status
    /// * `Err` - An error if the query could not be executed
    async fn exist_by_ids(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<(Uuid, bool)>, Box<dyn std::error::Error + Send + Sync>>;
}
