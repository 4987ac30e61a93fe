use std::error::Error;
use uuid::Uuid;

use backoffice_domain::models::manufacturing::BillOfMaterialModel;

use crate::store::InMemoryRepository;

pub type BillOfMaterialRepository = InMemoryRepository<BillOfMaterialModel>;

impl InMemoryRepository<BillOfMaterialModel> {
    /// Find the BOM ID for a code hash (codes are unique)
    pub async fn find_id_by_code_hash(
        &self,
        code_hash: i64,
    ) -> Result<Option<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .find_ids_by_i64_key("code_hash", code_hash)
            .into_iter()
            .next())
    }

    /// Find the IDs of all BOM versions for a produced item
    pub async fn find_ids_by_item_id(
        &self,
        item_id: Uuid,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_uuid_key("item_id", item_id))
    }
}
