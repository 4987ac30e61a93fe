use std::error::Error;
use uuid::Uuid;

use backoffice_domain::models::inventory::ItemModel;

use crate::store::InMemoryRepository;

pub type ItemRepository = InMemoryRepository<ItemModel>;

impl InMemoryRepository<ItemModel> {
    /// Find the item ID for a SKU hash (SKUs are unique)
    pub async fn find_id_by_sku_hash(
        &self,
        sku_hash: i64,
    ) -> Result<Option<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .find_ids_by_i64_key("sku_hash", sku_hash)
            .into_iter()
            .next())
    }

    /// Find the IDs of all items assigned to a category
    pub async fn find_ids_by_category_id(
        &self,
        category_id: Uuid,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_uuid_key("category_id", category_id))
    }
}
