use std::error::Error;
use uuid::Uuid;

use backoffice_domain::models::fleet::VehicleModel;

use crate::store::InMemoryRepository;

pub type VehicleRepository = InMemoryRepository<VehicleModel>;

impl InMemoryRepository<VehicleModel> {
    /// Find the vehicle ID for a registration plate hash (plates are unique)
    pub async fn find_id_by_registration_plate_hash(
        &self,
        registration_plate_hash: i64,
    ) -> Result<Option<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .find_ids_by_i64_key("registration_plate_hash", registration_plate_hash)
            .into_iter()
            .next())
    }
}
