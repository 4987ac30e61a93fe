//! Representative seed records for demos and integration tests.
//!
//! Enabled with the `fixtures` feature. Each `seed_*` function fills the
//! given repositories with a small, internally consistent data set.

use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use uuid::Uuid;

use backoffice_domain::models::fleet::{
    DeliveryModel, DeliveryStatus, FuelLogModel, VehicleModel, VehicleStatus,
};
use backoffice_domain::models::hr::{EmployeeModel, OnboardingStatus};
use backoffice_domain::models::inventory::{CategoryModel, ItemModel, ItemStatus};
use backoffice_domain::models::manufacturing::{
    BillOfMaterialModel, BomComponentModel, BomStatus, ProductionOrderModel,
    ProductionOrderStatus,
};
use backoffice_domain::models::projects::{
    BudgetLineModel, CostCategory, ProjectModel, ProjectStatus,
};
use backoffice_domain::repository::CreateBatch;

use crate::repository::fleet::FleetRepositories;
use crate::repository::hr::HrRepositories;
use crate::repository::inventory::InventoryRepositories;
use crate::repository::manufacturing::ManufacturingRepositories;
use crate::repository::projects::ProjectsRepositories;

type SeedResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

fn hstring<const N: usize>(value: &str) -> HeaplessString<N> {
    HeaplessString::try_from(value).unwrap_or_default()
}

/// Seed a small category tree and a handful of stock items
pub async fn seed_inventory(repos: &InventoryRepositories) -> SeedResult {
    let electronics = CategoryModel {
        id: Uuid::new_v4(),
        code: hstring("ELEC"),
        name: hstring("Electronics"),
        description: None,
        parent_category_id: None,
        active: true,
    };
    let cables = CategoryModel {
        id: Uuid::new_v4(),
        code: hstring("ELEC-CBL"),
        name: hstring("Cables"),
        description: Some(hstring("Cabling and connectors")),
        parent_category_id: Some(electronics.id),
        active: true,
    };

    let items = vec![
        ItemModel {
            id: Uuid::new_v4(),
            sku: hstring("CBL-USB-2M"),
            name: hstring("USB cable 2m"),
            description: None,
            category_id: Some(cables.id),
            unit_price: Decimal::new(499, 2),
            quantity_on_hand: 240,
            reorder_level: 50,
            status: ItemStatus::Active,
        },
        ItemModel {
            id: Uuid::new_v4(),
            sku: hstring("CBL-HDMI-1M"),
            name: hstring("HDMI cable 1m"),
            description: None,
            category_id: Some(cables.id),
            unit_price: Decimal::new(899, 2),
            quantity_on_hand: 8,
            reorder_level: 20,
            status: ItemStatus::Active,
        },
        ItemModel {
            id: Uuid::new_v4(),
            sku: hstring("MON-24-FHD"),
            name: hstring("24\" monitor"),
            description: None,
            category_id: Some(electronics.id),
            unit_price: Decimal::new(12900, 2),
            quantity_on_hand: 31,
            reorder_level: 5,
            status: ItemStatus::Discontinued,
        },
    ];

    repos
        .category_repository
        .create_batch(vec![electronics, cables])
        .await?;
    repos.item_repository.create_batch(items).await?;
    Ok(())
}

/// Seed a released BOM with components and one open production order
pub async fn seed_manufacturing(repos: &ManufacturingRepositories) -> SeedResult {
    let produced_item = Uuid::new_v4();

    let bom = BillOfMaterialModel {
        id: Uuid::new_v4(),
        code: hstring("BOM-DESK-01"),
        item_id: produced_item,
        version: 2,
        status: BomStatus::Released,
        notes: None,
    };

    let components = vec![
        BomComponentModel {
            id: Uuid::new_v4(),
            bom_id: bom.id,
            component_item_id: Uuid::new_v4(),
            quantity: Decimal::from(4),
            scrap_percent: Decimal::ZERO,
            position: 1,
        },
        BomComponentModel {
            id: Uuid::new_v4(),
            bom_id: bom.id,
            component_item_id: Uuid::new_v4(),
            quantity: Decimal::ONE,
            scrap_percent: Decimal::new(25, 1),
            position: 2,
        },
    ];

    let order = ProductionOrderModel {
        id: Uuid::new_v4(),
        order_number: hstring("PO-2026-0117"),
        item_id: produced_item,
        bom_id: Some(bom.id),
        quantity_planned: Decimal::from(250),
        quantity_produced: Decimal::from(90),
        status: ProductionOrderStatus::InProgress,
        scheduled_start: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap_or_default(),
        scheduled_end: NaiveDate::from_ymd_opt(2026, 9, 5),
    };

    repos
        .bill_of_material_repository
        .create_batch(vec![bom])
        .await?;
    repos
        .bom_component_repository
        .create_batch(components)
        .await?;
    repos
        .production_order_repository
        .create_batch(vec![order])
        .await?;
    Ok(())
}

/// Seed one active project with budget lines in several cost categories
pub async fn seed_projects(repos: &ProjectsRepositories) -> SeedResult {
    let project = ProjectModel {
        id: Uuid::new_v4(),
        code: hstring("PRJ-WH-EXT"),
        name: hstring("Warehouse extension"),
        status: ProjectStatus::Active,
        start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap_or_default(),
        end_date: None,
        planned_budget: Decimal::from(80_000),
    };

    let lines = vec![
        BudgetLineModel {
            id: Uuid::new_v4(),
            project_id: project.id,
            cost_category: CostCategory::Labor,
            description: Some(hstring("Construction crew")),
            planned_amount: Decimal::from(45_000),
            actual_amount: Decimal::from(30_250),
        },
        BudgetLineModel {
            id: Uuid::new_v4(),
            project_id: project.id,
            cost_category: CostCategory::Materials,
            description: Some(hstring("Steel and concrete")),
            planned_amount: Decimal::from(25_000),
            actual_amount: Decimal::from(26_400),
        },
        BudgetLineModel {
            id: Uuid::new_v4(),
            project_id: project.id,
            cost_category: CostCategory::Equipment,
            description: None,
            planned_amount: Decimal::from(10_000),
            actual_amount: Decimal::ZERO,
        },
    ];

    repos.project_repository.create_batch(vec![project]).await?;
    repos.budget_line_repository.create_batch(lines).await?;
    Ok(())
}

/// Seed employees across the onboarding stages
pub async fn seed_hr(repos: &HrRepositories) -> SeedResult {
    let employees = vec![
        EmployeeModel {
            id: Uuid::new_v4(),
            employee_number: hstring("EMP-0001"),
            display_name: hstring("Alex Fischer"),
            department: Some(hstring("Operations")),
            hire_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default(),
            onboarding_status: OnboardingStatus::Completed,
            active: true,
        },
        EmployeeModel {
            id: Uuid::new_v4(),
            employee_number: hstring("EMP-0002"),
            display_name: hstring("Sam Okafor"),
            department: Some(hstring("Logistics")),
            hire_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap_or_default(),
            onboarding_status: OnboardingStatus::InProgress,
            active: true,
        },
    ];

    repos.employee_repository.create_batch(employees).await?;
    Ok(())
}

/// Seed one vehicle with fuel logs and deliveries
pub async fn seed_fleet(repos: &FleetRepositories) -> SeedResult {
    let van = VehicleModel {
        id: Uuid::new_v4(),
        registration_plate: hstring("B-TR-2041"),
        make_model: hstring("Transit L2H2"),
        status: VehicleStatus::InService,
        odometer_km: 58_400,
    };

    let fuel_logs = vec![
        FuelLogModel {
            id: Uuid::new_v4(),
            vehicle_id: van.id,
            logged_on: NaiveDate::from_ymd_opt(2026, 8, 3).unwrap_or_default(),
            liters: Decimal::new(482, 1),
            cost: Decimal::new(7950, 2),
            odometer_km: 57_800,
        },
        FuelLogModel {
            id: Uuid::new_v4(),
            vehicle_id: van.id,
            logged_on: NaiveDate::from_ymd_opt(2026, 8, 17).unwrap_or_default(),
            liters: Decimal::new(511, 1),
            cost: Decimal::new(8420, 2),
            odometer_km: 58_400,
        },
    ];

    let deliveries = vec![
        DeliveryModel {
            id: Uuid::new_v4(),
            delivery_number: hstring("DLV-2026-105"),
            vehicle_id: Some(van.id),
            destination: hstring("Plant South"),
            distance_km: Decimal::from(86),
            scheduled_on: NaiveDate::from_ymd_opt(2026, 8, 18).unwrap_or_default(),
            status: DeliveryStatus::Completed,
        },
        DeliveryModel {
            id: Uuid::new_v4(),
            delivery_number: hstring("DLV-2026-106"),
            vehicle_id: Some(van.id),
            destination: hstring("Plant North"),
            distance_km: Decimal::from(132),
            scheduled_on: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap_or_default(),
            status: DeliveryStatus::InTransit,
        },
    ];

    repos.vehicle_repository.create_batch(vec![van]).await?;
    repos.fuel_log_repository.create_batch(fuel_logs).await?;
    repos.delivery_repository.create_batch(deliveries).await?;
    Ok(())
}
