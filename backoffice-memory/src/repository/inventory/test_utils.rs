use heapless::String as HeaplessString;
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

use backoffice_domain::models::inventory::{CategoryModel, ItemModel, ItemStatus};

pub fn unique_code(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    format!("{}-{:06}", prefix, rng.gen_range(0..1_000_000))
}

pub fn create_test_category(parent_category_id: Option<Uuid>) -> CategoryModel {
    CategoryModel {
        id: Uuid::new_v4(),
        code: HeaplessString::try_from(unique_code("CAT").as_str()).unwrap(),
        name: HeaplessString::try_from("Test Category").unwrap(),
        description: None,
        parent_category_id,
        active: true,
    }
}

pub fn create_test_item(category_id: Option<Uuid>) -> ItemModel {
    ItemModel {
        id: Uuid::new_v4(),
        sku: HeaplessString::try_from(unique_code("SKU").as_str()).unwrap(),
        name: HeaplessString::try_from("Test Item").unwrap(),
        description: None,
        category_id,
        unit_price: Decimal::new(1999, 2),
        quantity_on_hand: 50,
        reorder_level: 10,
        status: ItemStatus::Active,
    }
}
