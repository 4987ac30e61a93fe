use std::error::Error;
use uuid::Uuid;

use backoffice_domain::models::inventory::CategoryModel;

use crate::store::InMemoryRepository;

pub type CategoryRepository = InMemoryRepository<CategoryModel>;

impl InMemoryRepository<CategoryModel> {
    /// Find the category ID for a code hash (codes are unique)
    pub async fn find_id_by_code_hash(
        &self,
        code_hash: i64,
    ) -> Result<Option<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .find_ids_by_i64_key("code_hash", code_hash)
            .into_iter()
            .next())
    }

    /// Find the IDs of all direct child categories
    pub async fn find_ids_by_parent_category_id(
        &self,
        parent_category_id: Uuid,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_uuid_key("parent_category_id", parent_category_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::inventory::test_utils::create_test_category;
    use backoffice_domain::repository::CreateBatch;
    use backoffice_domain::utils::hash_as_i64;

    #[tokio::test]
    async fn test_find_id_by_code_hash() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = CategoryRepository::new();
        let category = create_test_category(None);
        let code = category.code.clone();
        repo.create_batch(vec![category.clone()]).await?;

        let code_hash = hash_as_i64(&code.as_str()).unwrap();
        let found = repo.find_id_by_code_hash(code_hash).await?;
        assert_eq!(found, Some(category.id));

        let missing = repo.find_id_by_code_hash(code_hash.wrapping_add(1)).await?;
        assert_eq!(missing, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_ids_by_parent_category_id(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = CategoryRepository::new();
        let parent = create_test_category(None);
        let child_a = create_test_category(Some(parent.id));
        let child_b = create_test_category(Some(parent.id));
        repo.create_batch(vec![parent.clone(), child_a.clone(), child_b.clone()])
            .await?;

        let mut found = repo.find_ids_by_parent_category_id(parent.id).await?;
        found.sort();
        let mut expected = vec![child_a.id, child_b.id];
        expected.sort();
        assert_eq!(found, expected);
        Ok(())
    }
}
