use std::error::Error;
use uuid::Uuid;

use backoffice_domain::models::manufacturing::ProductionOrderModel;

use crate::store::InMemoryRepository;

pub type ProductionOrderRepository = InMemoryRepository<ProductionOrderModel>;

impl InMemoryRepository<ProductionOrderModel> {
    /// Find the order ID for an order number hash (order numbers are unique)
    pub async fn find_id_by_order_number_hash(
        &self,
        order_number_hash: i64,
    ) -> Result<Option<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .find_ids_by_i64_key("order_number_hash", order_number_hash)
            .into_iter()
            .next())
    }

    /// Find the IDs of all production orders for an item
    pub async fn find_ids_by_item_id(
        &self,
        item_id: Uuid,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_uuid_key("item_id", item_id))
    }

    /// Find the IDs of all production orders referencing a BOM
    pub async fn find_ids_by_bom_id(
        &self,
        bom_id: Uuid,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_uuid_key("bom_id", bom_id))
    }
}
