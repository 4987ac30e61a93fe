use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

use backoffice_domain::models::hr::{EmployeeModel, EvaluationModel, EvaluationStatus, OnboardingStatus};

pub fn unique_code(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    format!("{}-{:06}", prefix, rng.gen_range(0..1_000_000))
}

pub fn create_test_employee() -> EmployeeModel {
    EmployeeModel {
        id: Uuid::new_v4(),
        employee_number: HeaplessString::try_from(unique_code("EMP").as_str()).unwrap(),
        display_name: HeaplessString::try_from("Test Employee").unwrap(),
        department: None,
        hire_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        onboarding_status: OnboardingStatus::Completed,
        active: true,
    }
}

pub fn create_test_evaluation(employee_id: Uuid, period: &str) -> EvaluationModel {
    EvaluationModel {
        id: Uuid::new_v4(),
        employee_id,
        period: HeaplessString::try_from(period).unwrap(),
        reviewer_id: None,
        status: EvaluationStatus::Draft,
        overall_score: Decimal::ZERO,
    }
}
