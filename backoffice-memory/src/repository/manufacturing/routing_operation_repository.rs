use std::error::Error;
use uuid::Uuid;

use backoffice_domain::models::manufacturing::RoutingOperationModel;

use crate::store::InMemoryRepository;

pub type RoutingOperationRepository = InMemoryRepository<RoutingOperationModel>;

impl InMemoryRepository<RoutingOperationModel> {
    /// Find the IDs of all routing operations of a BOM
    pub async fn find_ids_by_bom_id(
        &self,
        bom_id: Uuid,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_uuid_key("bom_id", bom_id))
    }
}
