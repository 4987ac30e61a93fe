use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::pagination::{Page, PageRequest};

/// Generic repository trait for paginated listing of entities
///
/// Listing is ordered and deterministic for a given store state; the order
/// is implementation-defined (the in-memory store sorts by ID) and the
/// requested page is clamped per the pagination contract.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl List<ItemModel> for InMemoryRepository<ItemModel> {
///     async fn list(&self, request: PageRequest) -> Result<Page<ItemModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait List<T: Identifiable>: Send + Sync {
    /// List one page of entities
    ///
    /// # Arguments
    /// * `request` - 1-based page number and page size
    ///
    /// # Returns
    /// * `Ok(Page<T>)` - The requested page with total counts
    /// * `Err` - An error if the query could not be executed
    async fn list(
        &self,
        request: PageRequest,
    ) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;
}
