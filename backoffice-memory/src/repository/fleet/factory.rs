use std::sync::Arc;

use super::{
    DeliveryRepository, FuelLogRepository, MaintenanceOrderRepository, VehicleRepository,
};

/// Factory for creating fleet module repositories
pub struct FleetRepoFactory {
    vehicle_repository: Arc<VehicleRepository>,
    fuel_log_repository: Arc<FuelLogRepository>,
    delivery_repository: Arc<DeliveryRepository>,
    maintenance_order_repository: Arc<MaintenanceOrderRepository>,
}

impl FleetRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            vehicle_repository: Arc::new(VehicleRepository::new()),
            fuel_log_repository: Arc::new(FuelLogRepository::new()),
            delivery_repository: Arc::new(DeliveryRepository::new()),
            maintenance_order_repository: Arc::new(MaintenanceOrderRepository::new()),
        })
    }

    pub fn vehicle_repo(&self) -> Arc<VehicleRepository> {
        self.vehicle_repository.clone()
    }

    pub fn fuel_log_repo(&self) -> Arc<FuelLogRepository> {
        self.fuel_log_repository.clone()
    }

    pub fn delivery_repo(&self) -> Arc<DeliveryRepository> {
        self.delivery_repository.clone()
    }

    pub fn maintenance_order_repo(&self) -> Arc<MaintenanceOrderRepository> {
        self.maintenance_order_repository.clone()
    }

    /// Build the full set of fleet repositories
    pub fn build_all_repos(&self) -> FleetRepositories {
        FleetRepositories {
            vehicle_repository: self.vehicle_repo(),
            fuel_log_repository: self.fuel_log_repo(),
            delivery_repository: self.delivery_repo(),
            maintenance_order_repository: self.maintenance_order_repo(),
        }
    }
}

/// Container for all fleet module repositories
pub struct FleetRepositories {
    pub vehicle_repository: Arc<VehicleRepository>,
    pub fuel_log_repository: Arc<FuelLogRepository>,
    pub delivery_repository: Arc<DeliveryRepository>,
    pub maintenance_order_repository: Arc<MaintenanceOrderRepository>,
}
