use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use backoffice_domain::cache::IdxModelCache;
use backoffice_domain::models::{HasPrimaryKey, Identifiable, IndexAware, Indexable};
use backoffice_domain::repository::{
    CreateBatch, DeleteBatch, ExistByIds, FindById, FindIndicesByIds, List, Load, LoadBatch,
    Page, PageRequest, UpdateBatch,
};

use crate::error::StoreError;

type RepoResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// In-memory entity store with a secondary-index cache
///
/// Stores full entity records keyed by ID and keeps the entity's index
/// records in an [`IdxModelCache`] for hash and reference lookups. Writes
/// take both locks together so the cache never diverges from the records.
pub struct InMemoryRepository<T: IndexAware> {
    records: RwLock<HashMap<Uuid, T>>,
    idx_cache: RwLock<IdxModelCache<T::IndexType>>,
}

impl<T> InMemoryRepository<T>
where
    T: Identifiable + IndexAware + Clone,
    T::IndexType: Indexable + HasPrimaryKey,
{
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            idx_cache: RwLock::new(IdxModelCache::default()),
        }
    }

    /// Build a store pre-populated with the given records
    pub fn with_records(items: Vec<T>) -> Self {
        let store = Self::new();
        {
            let mut records = store.records.write();
            let mut cache = store.idx_cache.write();
            for item in items {
                cache.add(item.to_index());
                records.insert(item.get_id(), item);
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// IDs of entities whose named i64 index key equals `value`
    pub fn find_ids_by_i64_key(&self, key: &str, value: i64) -> Vec<Uuid> {
        self.idx_cache.read().get_by_i64_key(key, value)
    }

    /// IDs of entities whose named UUID index key equals `value`
    pub fn find_ids_by_uuid_key(&self, key: &str, value: Uuid) -> Vec<Uuid> {
        self.idx_cache.read().get_by_uuid_key(key, value)
    }
}

impl<T> Default for InMemoryRepository<T>
where
    T: Identifiable + IndexAware + Clone,
    T::IndexType: Indexable + HasPrimaryKey,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Load<T> for InMemoryRepository<T>
where
    T: Identifiable + IndexAware + Clone + Send + Sync,
    T::IndexType: Indexable + HasPrimaryKey + Send + Sync,
{
    async fn load(&self, id: Uuid) -> RepoResult<T> {
        self.records
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id).into())
    }
}

#[async_trait]
impl<T> LoadBatch<T> for InMemoryRepository<T>
where
    T: Identifiable + IndexAware + Clone + Send + Sync,
    T::IndexType: Indexable + HasPrimaryKey + Send + Sync,
{
    async fn load_batch(&self, ids: &[Uuid]) -> RepoResult<Vec<Option<T>>> {
        let records = self.records.read();
        Ok(ids.iter().map(|id| records.get(id).cloned()).collect())
    }
}

#[async_trait]
impl<T> CreateBatch<T> for InMemoryRepository<T>
where
    T: Identifiable + IndexAware + Clone + Send + Sync,
    T::IndexType: Indexable + HasPrimaryKey + Send + Sync,
{
    async fn create_batch(&self, items: Vec<T>) -> RepoResult<Vec<T>> {
        let mut records = self.records.write();
        let mut cache = self.idx_cache.write();

        // Validate the whole batch before touching the store
        let mut batch_ids = HashSet::new();
        for item in &items {
            let id = item.get_id();
            if records.contains_key(&id) || !batch_ids.insert(id) {
                return Err(StoreError::DuplicateId(id).into());
            }
        }

        for item in &items {
            cache.add(item.to_index());
            records.insert(item.get_id(), item.clone());
        }
        tracing::debug!(count = items.len(), "created entities");
        Ok(items)
    }
}

#[async_trait]
impl<T> UpdateBatch<T> for InMemoryRepository<T>
where
    T: Identifiable + IndexAware + Clone + Send + Sync,
    T::IndexType: Indexable + HasPrimaryKey + Send + Sync,
{
    async fn update_batch(&self, items: Vec<T>) -> RepoResult<Vec<T>> {
        let mut records = self.records.write();
        let mut cache = self.idx_cache.write();

        for item in &items {
            if !records.contains_key(&item.get_id()) {
                return Err(StoreError::NotFound(item.get_id()).into());
            }
        }

        for item in &items {
            cache.add(item.to_index());
            records.insert(item.get_id(), item.clone());
        }
        tracing::debug!(count = items.len(), "updated entities");
        Ok(items)
    }
}

#[async_trait]
impl<T> DeleteBatch for InMemoryRepository<T>
where
    T: Identifiable + IndexAware + Clone + Send + Sync,
    T::IndexType: Indexable + HasPrimaryKey + Send + Sync,
{
    async fn delete_batch(&self, ids: &[Uuid]) -> RepoResult<usize> {
        let mut records = self.records.write();
        let mut cache = self.idx_cache.write();

        let mut deleted = 0;
        for id in ids {
            if records.remove(id).is_some() {
                cache.remove(id);
                deleted += 1;
            }
        }
        tracing::debug!(count = deleted, "deleted entities");
        Ok(deleted)
    }
}

#[async_trait]
impl<T> ExistByIds for InMemoryRepository<T>
where
    T: Identifiable + IndexAware + Clone + Send + Sync,
    T::IndexType: Indexable + HasPrimaryKey + Send + Sync,
{
    async fn exist_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<(Uuid, bool)>> {
        let records = self.records.read();
        Ok(ids
            .iter()
            .map(|id| (*id, records.contains_key(id)))
            .collect())
    }
}

#[async_trait]
impl<T> FindById<T::IndexType> for InMemoryRepository<T>
where
    T: Identifiable + IndexAware + Clone + Send + Sync,
    T::IndexType: Indexable + HasPrimaryKey + Clone + Send + Sync,
{
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<T::IndexType>> {
        Ok(self.idx_cache.read().get_by_primary(&id).cloned())
    }
}

#[async_trait]
impl<T> FindIndicesByIds<T::IndexType> for InMemoryRepository<T>
where
    T: Identifiable + IndexAware + Clone + Send + Sync,
    T::IndexType: Indexable + HasPrimaryKey + Clone + Send + Sync,
{
    async fn find_indices_by_ids(&self, ids: &[Uuid]) -> RepoResult<Vec<T::IndexType>> {
        let cache = self.idx_cache.read();
        Ok(ids
            .iter()
            .filter_map(|id| cache.get_by_primary(id).cloned())
            .collect())
    }
}

#[async_trait]
impl<T> List<T> for InMemoryRepository<T>
where
    T: Identifiable + IndexAware + Clone + Send + Sync,
    T::IndexType: Indexable + HasPrimaryKey + Send + Sync,
{
    /// Lists entities sorted by ID for a deterministic page order
    async fn list(&self, request: PageRequest) -> RepoResult<Page<T>> {
        let records = self.records.read();
        let mut items: Vec<T> = records.values().cloned().collect();
        items.sort_by_key(|item| item.get_id());
        Ok(Page::from_slice(&items, request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_domain::models::inventory::CategoryModel;
    use heapless::String as HeaplessString;

    fn category(code: &str, parent: Option<Uuid>) -> CategoryModel {
        CategoryModel {
            id: Uuid::new_v4(),
            code: HeaplessString::try_from(code).unwrap(),
            name: HeaplessString::try_from("Test Category").unwrap(),
            description: None,
            parent_category_id: parent,
            active: true,
        }
    }

    #[tokio::test]
    async fn test_create_and_load() -> RepoResult<()> {
        let repo = InMemoryRepository::new();
        let cat = category("CAT-A", None);
        let id = cat.id;

        repo.create_batch(vec![cat]).await?;
        let loaded = repo.load(id).await?;
        assert_eq!(loaded.id, id);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_missing_is_error() {
        let repo: InMemoryRepository<CategoryModel> = InMemoryRepository::new();
        let result = repo.load(Uuid::new_v4()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_create_duplicate_leaves_store_unchanged() -> RepoResult<()> {
        let repo = InMemoryRepository::new();
        let existing = category("CAT-A", None);
        repo.create_batch(vec![existing.clone()]).await?;

        let fresh = category("CAT-B", None);
        let result = repo.create_batch(vec![fresh.clone(), existing]).await;
        assert!(result.is_err());

        // Atomic: the fresh record from the failed batch must not be stored
        assert_eq!(repo.len(), 1);
        assert!(repo.load_batch(&[fresh.id]).await?[0].is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_is_error() -> RepoResult<()> {
        let repo = InMemoryRepository::new();
        let stored = category("CAT-A", None);
        repo.create_batch(vec![stored.clone()]).await?;

        let mut changed = stored.clone();
        changed.active = false;
        let missing = category("CAT-B", None);
        let result = repo.update_batch(vec![changed, missing]).await;
        assert!(result.is_err());

        // Atomic: the valid update from the failed batch must not be applied
        let reloaded = repo.load(stored.id).await?;
        assert!(reloaded.active);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_counts_only_existing() -> RepoResult<()> {
        let repo = InMemoryRepository::new();
        let a = category("CAT-A", None);
        let b = category("CAT-B", None);
        repo.create_batch(vec![a.clone(), b.clone()]).await?;

        let deleted = repo.delete_batch(&[a.id, Uuid::new_v4()]).await?;
        assert_eq!(deleted, 1);
        assert_eq!(repo.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_batch_preserves_order() -> RepoResult<()> {
        let repo = InMemoryRepository::new();
        let a = category("CAT-A", None);
        let b = category("CAT-B", None);
        repo.create_batch(vec![a.clone(), b.clone()]).await?;

        let missing = Uuid::new_v4();
        let loaded = repo.load_batch(&[b.id, missing, a.id]).await?;
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].as_ref().map(|c| c.id), Some(b.id));
        assert!(loaded[1].is_none());
        assert_eq!(loaded[2].as_ref().map(|c| c.id), Some(a.id));
        Ok(())
    }

    #[tokio::test]
    async fn test_exist_by_ids() -> RepoResult<()> {
        let repo = InMemoryRepository::new();
        let a = category("CAT-A", None);
        repo.create_batch(vec![a.clone()]).await?;

        let missing = Uuid::new_v4();
        let existence = repo.exist_by_ids(&[a.id, missing]).await?;
        assert_eq!(existence, vec![(a.id, true), (missing, false)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_index_cache_follows_writes() -> RepoResult<()> {
        let repo = InMemoryRepository::new();
        let parent = category("CAT-ROOT", None);
        let child = category("CAT-CHILD", Some(parent.id));
        repo.create_batch(vec![parent.clone(), child.clone()]).await?;

        assert_eq!(
            repo.find_ids_by_uuid_key("parent_category_id", parent.id),
            vec![child.id]
        );

        repo.delete_batch(&[child.id]).await?;
        assert!(repo
            .find_ids_by_uuid_key("parent_category_id", parent.id)
            .is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_list_pages_cover_the_store() -> RepoResult<()> {
        let repo = InMemoryRepository::new();
        let categories: Vec<CategoryModel> =
            (0..23).map(|i| category(&format!("C-{i:02}"), None)).collect();
        repo.create_batch(categories).await?;

        let request = PageRequest::new(3, 10)?;
        let page = repo.list(request).await?;
        assert_eq!(page.total_items, 23);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 3);

        // A page past the end clamps to the last page
        let request = PageRequest::new(9, 10)?;
        let page = repo.list(request).await?;
        assert_eq!(page.page, 3);
        Ok(())
    }
}
