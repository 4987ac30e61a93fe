use std::error::Error;
use uuid::Uuid;

use backoffice_domain::models::fleet::DeliveryModel;

use crate::store::InMemoryRepository;

pub type DeliveryRepository = InMemoryRepository<DeliveryModel>;

impl InMemoryRepository<DeliveryModel> {
    /// Find the delivery ID for a delivery number hash (numbers are unique)
    pub async fn find_id_by_delivery_number_hash(
        &self,
        delivery_number_hash: i64,
    ) -> Result<Option<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .find_ids_by_i64_key("delivery_number_hash", delivery_number_hash)
            .into_iter()
            .next())
    }

    /// Find the IDs of all deliveries assigned to a vehicle
    pub async fn find_ids_by_vehicle_id(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_uuid_key("vehicle_id", vehicle_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fleet::test_utils::create_test_delivery;
    use backoffice_domain::repository::{CreateBatch, UpdateBatch};

    #[tokio::test]
    async fn test_unassigned_deliveries_are_not_indexed(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = DeliveryRepository::new();
        let vehicle_id = Uuid::new_v4();
        let mut delivery = create_test_delivery(None);
        repo.create_batch(vec![delivery.clone()]).await?;

        assert!(repo.find_ids_by_vehicle_id(vehicle_id).await?.is_empty());

        delivery.vehicle_id = Some(vehicle_id);
        repo.update_batch(vec![delivery.clone()]).await?;
        assert_eq!(
            repo.find_ids_by_vehicle_id(vehicle_id).await?,
            vec![delivery.id]
        );
        Ok(())
    }
}
