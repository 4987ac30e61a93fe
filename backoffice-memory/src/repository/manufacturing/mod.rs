pub mod bill_of_material_repository;
pub mod bom_component_repository;
pub mod factory;
pub mod production_order_repository;
pub mod routing_operation_repository;

#[cfg(test)]
pub mod test_utils;

pub use bill_of_material_repository::BillOfMaterialRepository;
pub use bom_component_repository::BomComponentRepository;
pub use factory::{ManufacturingRepoFactory, ManufacturingRepositories};
pub use production_order_repository::ProductionOrderRepository;
pub use routing_operation_repository::RoutingOperationRepository;
