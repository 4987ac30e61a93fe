use std::sync::Arc;

use super::{
    BillOfMaterialRepository, BomComponentRepository, ProductionOrderRepository,
    RoutingOperationRepository,
};

/// Factory for creating manufacturing module repositories
pub struct ManufacturingRepoFactory {
    bill_of_material_repository: Arc<BillOfMaterialRepository>,
    bom_component_repository: Arc<BomComponentRepository>,
    routing_operation_repository: Arc<RoutingOperationRepository>,
    production_order_repository: Arc<ProductionOrderRepository>,
}

impl ManufacturingRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            bill_of_material_repository: Arc::new(BillOfMaterialRepository::new()),
            bom_component_repository: Arc::new(BomComponentRepository::new()),
            routing_operation_repository: Arc::new(RoutingOperationRepository::new()),
            production_order_repository: Arc::new(ProductionOrderRepository::new()),
        })
    }

    pub fn bill_of_material_repo(&self) -> Arc<BillOfMaterialRepository> {
        self.bill_of_material_repository.clone()
    }

    pub fn bom_component_repo(&self) -> Arc<BomComponentRepository> {
        self.bom_component_repository.clone()
    }

    pub fn routing_operation_repo(&self) -> Arc<RoutingOperationRepository> {
        self.routing_operation_repository.clone()
    }

    pub fn production_order_repo(&self) -> Arc<ProductionOrderRepository> {
        self.production_order_repository.clone()
    }

    /// Build the full set of manufacturing repositories
    pub fn build_all_repos(&self) -> ManufacturingRepositories {
        ManufacturingRepositories {
            bill_of_material_repository: self.bill_of_material_repo(),
            bom_component_repository: self.bom_component_repo(),
            routing_operation_repository: self.routing_operation_repo(),
            production_order_repository: self.production_order_repo(),
        }
    }
}

/// Container for all manufacturing module repositories
pub struct ManufacturingRepositories {
    pub bill_of_material_repository: Arc<BillOfMaterialRepository>,
    pub bom_component_repository: Arc<BomComponentRepository>,
    pub routing_operation_repository: Arc<RoutingOperationRepository>,
    pub production_order_repository: Arc<ProductionOrderRepository>,
}
