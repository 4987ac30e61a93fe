use std::error::Error;
use uuid::Uuid;

use backoffice_domain::models::fleet::MaintenanceOrderModel;

use crate::store::InMemoryRepository;

pub type MaintenanceOrderRepository = InMemoryRepository<MaintenanceOrderModel>;

impl InMemoryRepository<MaintenanceOrderModel> {
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

    /// Find the IDs of all maintenance orders of a vehicle
    pub async fn find_ids_by_vehicle_id(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_uuid_key("vehicle_id", vehicle_id))
    }
}
