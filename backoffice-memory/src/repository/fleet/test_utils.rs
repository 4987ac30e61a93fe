use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

use backoffice_domain::models::fleet::{
    DeliveryModel, DeliveryStatus, FuelLogModel, VehicleModel, VehicleStatus,
};

pub fn unique_code(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    format!("{}-{:06}", prefix, rng.gen_range(0..1_000_000))
}

pub fn create_test_vehicle() -> VehicleModel {
    VehicleModel {
        id: Uuid::new_v4(),
        registration_plate: HeaplessString::try_from(unique_code("PLT").as_str()).unwrap(),
        make_model: HeaplessString::try_from("Test Van 2.0").unwrap(),
        status: VehicleStatus::Available,
        odometer_km: 42_000,
    }
}

pub fn create_test_fuel_log(vehicle_id: Uuid, liters: i64, odometer_km: u32) -> FuelLogModel {
    FuelLogModel {
        id: Uuid::new_v4(),
        vehicle_id,
        logged_on: NaiveDate::from_ymd_opt(2026, 7, 20).unwrap(),
        liters: Decimal::from(liters),
        cost: Decimal::from(liters) * Decimal::new(15, 1),
        odometer_km,
    }
}

pub fn create_test_delivery(vehicle_id: Option<Uuid>) -> DeliveryModel {
    DeliveryModel {
        id: Uuid::new_v4(),
        delivery_number: HeaplessString::try_from(unique_code("DLV").as_str()).unwrap(),
        vehicle_id,
        destination: HeaplessString::try_from("Warehouse North").unwrap(),
        distance_km: Decimal::from(120),
        scheduled_on: NaiveDate::from_ymd_opt(2026, 7, 21).unwrap(),
        status: DeliveryStatus::Planned,
    }
}
