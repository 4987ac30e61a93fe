use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::models::{HasPrimaryKey, Indexable};

/// In-process cache of index records with secondary-key lookup
///
/// Holds the full index set of one entity type, keyed by primary key, plus
/// reverse maps for every i64 and UUID key the records expose through
/// `Indexable`. Lookups return the primary keys of all matching records.
///
/// # Example
/// ```ignore
/// let mut cache = IdxModelCache::new(vec![item.to_index()]);
/// let ids = cache.get_by_uuid_key("category_id", category_id);
/// ```
#[derive(Debug, Clone)]
pub struct IdxModelCache<T> {
    by_primary: HashMap<Uuid, T>,
    i64_index: HashMap<String, HashMap<i64, HashSet<Uuid>>>,
    uuid_index: HashMap<String, HashMap<Uuid, HashSet<Uuid>>>,
}

impl<T: Indexable + HasPrimaryKey> IdxModelCache<T> {
    /// Build a cache from an initial set of index records
    pub fn new(items: Vec<T>) -> Self {
        let mut cache = Self {
            by_primary: HashMap::new(),
            i64_index: HashMap::new(),
            uuid_index: HashMap::new(),
        };
        for item in items {
            cache.add(item);
        }
        cache
    }

    /// Insert or replace the index record for its primary key
    pub fn add(&mut self, item: T) {
        let primary = item.primary_key();
        if let Some(previous) = self.by_primary.remove(&primary) {
            self.unlink(&previous);
        }
        for (key, value) in item.i64_keys() {
            if let Some(value) = value {
                self.i64_index
                    .entry(key)
                    .or_default()
                    .entry(value)
                    .or_default()
                    .insert(primary);
            }
        }
        for (key, value) in item.uuid_keys() {
            if let Some(value) = value {
                self.uuid_index
                    .entry(key)
                    .or_default()
                    .entry(value)
                    .or_default()
                    .insert(primary);
            }
        }
        self.by_primary.insert(primary, item);
    }

    /// Remove the index record for a primary key, returning it if present
    pub fn remove(&mut self, primary: &Uuid) -> Option<T> {
        let item = self.by_primary.remove(primary)?;
        self.unlink(&item);
        Some(item)
    }

    pub fn get_by_primary(&self, primary: &Uuid) -> Option<&T> {
        self.by_primary.get(primary)
    }

    pub fn contains_primary(&self, primary: &Uuid) -> bool {
        self.by_primary.contains_key(primary)
    }

    /// Primary keys of all records whose named i64 key equals `value`
    pub fn get_by_i64_key(&self, key: &str, value: i64) -> Vec<Uuid> {
        self.i64_index
            .get(key)
            .and_then(|by_value| by_value.get(&value))
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Primary keys of all records whose named UUID key equals `value`
    pub fn get_by_uuid_key(&self, key: &str, value: Uuid) -> Vec<Uuid> {
        self.uuid_index
            .get(key)
            .and_then(|by_value| by_value.get(&value))
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_primary.is_empty()
    }

    fn unlink(&mut self, item: &T) {
        let primary = item.primary_key();
        for (key, value) in item.i64_keys() {
            if let Some(value) = value {
                if let Some(ids) = self
                    .i64_index
                    .get_mut(&key)
                    .and_then(|by_value| by_value.get_mut(&value))
                {
                    ids.remove(&primary);
                }
            }
        }
        for (key, value) in item.uuid_keys() {
            if let Some(value) = value {
                if let Some(ids) = self
                    .uuid_index
                    .get_mut(&key)
                    .and_then(|by_value| by_value.get_mut(&value))
                {
                    ids.remove(&primary);
                }
            }
        }
    }
}

impl<T: Indexable + HasPrimaryKey> Default for IdxModelCache<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Identifiable, Index};

    #[derive(Debug, Clone)]
    struct TestIdx {
        id: Uuid,
        code_hash: Option<i64>,
        parent_id: Option<Uuid>,
    }

    impl Identifiable for TestIdx {
        fn get_id(&self) -> Uuid {
            self.id
        }
    }

    impl Index for TestIdx {}

    impl HasPrimaryKey for TestIdx {
        fn primary_key(&self) -> Uuid {
            self.id
        }
    }

    impl Indexable for TestIdx {
        fn i64_keys(&self) -> HashMap<String, Option<i64>> {
            let mut keys = HashMap::new();
            keys.insert("code_hash".to_string(), self.code_hash);
            keys
        }

        fn uuid_keys(&self) -> HashMap<String, Option<Uuid>> {
            let mut keys = HashMap::new();
            keys.insert("parent_id".to_string(), self.parent_id);
            keys
        }
    }

    fn idx(code_hash: Option<i64>, parent_id: Option<Uuid>) -> TestIdx {
        TestIdx {
            id: Uuid::new_v4(),
            code_hash,
            parent_id,
        }
    }

    #[test]
    fn add_and_find_by_keys() {
        let parent = Uuid::new_v4();
        let a = idx(Some(42), Some(parent));
        let b = idx(Some(42), None);
        let a_id = a.id;
        let b_id = b.id;

        let cache = IdxModelCache::new(vec![a, b]);

        let mut by_hash = cache.get_by_i64_key("code_hash", 42);
        by_hash.sort();
        let mut expected = vec![a_id, b_id];
        expected.sort();
        assert_eq!(by_hash, expected);

        assert_eq!(cache.get_by_uuid_key("parent_id", parent), vec![a_id]);
        assert!(cache.get_by_i64_key("code_hash", 7).is_empty());
    }

    #[test]
    fn replacing_a_record_relinks_its_keys() {
        let mut record = idx(Some(1), None);
        let id = record.id;
        let mut cache = IdxModelCache::new(vec![record.clone()]);

        record.code_hash = Some(2);
        cache.add(record);

        assert!(cache.get_by_i64_key("code_hash", 1).is_empty());
        assert_eq!(cache.get_by_i64_key("code_hash", 2), vec![id]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn remove_unlinks_all_keys() {
        let parent = Uuid::new_v4();
        let record = idx(Some(9), Some(parent));
        let id = record.id;
        let mut cache = IdxModelCache::new(vec![record]);

        assert!(cache.remove(&id).is_some());
        assert!(cache.is_empty());
        assert!(cache.get_by_i64_key("code_hash", 9).is_empty());
        assert!(cache.get_by_uuid_key("parent_id", parent).is_empty());
    }
}
