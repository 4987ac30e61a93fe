pub mod delivery_repository;
pub mod factory;
pub mod fuel_log_repository;
pub mod maintenance_order_repository;
pub mod vehicle_repository;

#[cfg(test)]
pub mod test_utils;

pub use delivery_repository::DeliveryRepository;
pub use factory::{FleetRepoFactory, FleetRepositories};
pub use fuel_log_repository::FuelLogRepository;
pub use maintenance_order_repository::MaintenanceOrderRepository;
pub use vehicle_repository::VehicleRepository;
