use std::error::Error;
use uuid::Uuid;

use backoffice_domain::models::manufacturing::BomComponentModel;

use crate::store::InMemoryRepository;

pub type BomComponentRepository = InMemoryRepository<BomComponentModel>;

impl InMemoryRepository<BomComponentModel> {
    /// Find the IDs of all component lines of a BOM
    pub async fn find_ids_by_bom_id(
        &self,
        bom_id: Uuid,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_uuid_key("bom_id", bom_id))
    }

    /// Find the IDs of all component lines that consume an item
    pub async fn find_ids_by_component_item_id(
        &self,
        component_item_id: Uuid,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_uuid_key("component_item_id", component_item_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::manufacturing::test_utils::create_test_component;
    use backoffice_domain::repository::{CreateBatch, DeleteBatch};

    #[tokio::test]
    async fn test_find_ids_by_bom_id() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = BomComponentRepository::new();
        let bom_id = Uuid::new_v4();
        let a = create_test_component(bom_id, 1);
        let b = create_test_component(bom_id, 2);
        repo.create_batch(vec![a.clone(), b.clone()]).await?;

        let mut found = repo.find_ids_by_bom_id(bom_id).await?;
        found.sort();
        let mut expected = vec![a.id, b.id];
        expected.sort();
        assert_eq!(found, expected);

        repo.delete_batch(&[a.id]).await?;
        assert_eq!(repo.find_ids_by_bom_id(bom_id).await?, vec![b.id]);
        Ok(())
    }
}
