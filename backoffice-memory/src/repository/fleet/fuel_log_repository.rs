use std::error::Error;
use uuid::Uuid;

use backoffice_domain::models::fleet::FuelLogModel;

use crate::store::InMemoryRepository;

pub type FuelLogRepository = InMemoryRepository<FuelLogModel>;

impl InMemoryRepository<FuelLogModel> {
    /// Find the IDs of all fuel logs of a vehicle
    pub async fn find_ids_by_vehicle_id(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_uuid_key("vehicle_id", vehicle_id))
    }
}
