use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

use backoffice_domain::models::manufacturing::{
    BillOfMaterialModel, BomComponentModel, BomStatus, ProductionOrderModel,
    ProductionOrderStatus,
};

pub fn unique_code(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    format!("{}-{:06}", prefix, rng.gen_range(0..1_000_000))
}

pub fn create_test_bom(item_id: Uuid) -> BillOfMaterialModel {
    BillOfMaterialModel {
        id: Uuid::new_v4(),
        code: HeaplessString::try_from(unique_code("BOM").as_str()).unwrap(),
        item_id,
        version: 1,
        status: BomStatus::Released,
        notes: None,
    }
}

pub fn create_test_component(bom_id: Uuid, position: i32) -> BomComponentModel {
    BomComponentModel {
        id: Uuid::new_v4(),
        bom_id,
        component_item_id: Uuid::new_v4(),
        quantity: Decimal::from(2),
        scrap_percent: Decimal::ZERO,
        position,
    }
}

pub fn create_test_production_order(item_id: Uuid) -> ProductionOrderModel {
    ProductionOrderModel {
        id: Uuid::new_v4(),
        order_number: HeaplessString::try_from(unique_code("PO").as_str()).unwrap(),
        item_id,
        bom_id: None,
        quantity_planned: Decimal::from(100),
        quantity_produced: Decimal::ZERO,
        status: ProductionOrderStatus::Planned,
        scheduled_start: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        scheduled_end: None,
    }
}
