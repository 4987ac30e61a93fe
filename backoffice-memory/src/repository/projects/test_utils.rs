use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

use backoffice_domain::models::projects::{
    BudgetLineModel, CostCategory, ProjectModel, ProjectStatus,
};

pub fn unique_code(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    format!("{}-{:06}", prefix, rng.gen_range(0..1_000_000))
}

pub fn create_test_project() -> ProjectModel {
    ProjectModel {
        id: Uuid::new_v4(),
        code: HeaplessString::try_from(unique_code("PRJ").as_str()).unwrap(),
        name: HeaplessString::try_from("Test Project").unwrap(),
        status: ProjectStatus::Active,
        start_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        end_date: None,
        planned_budget: Decimal::from(50_000),
    }
}

pub fn create_test_budget_line(project_id: Uuid, planned: i64, actual: i64) -> BudgetLineModel {
    BudgetLineModel {
        id: Uuid::new_v4(),
        project_id,
        cost_category: CostCategory::Materials,
        description: None,
        planned_amount: Decimal::from(planned),
        actual_amount: Decimal::from(actual),
    }
}
