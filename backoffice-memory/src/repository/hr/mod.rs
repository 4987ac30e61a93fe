pub mod employee_repository;
pub mod evaluation_repository;
pub mod factory;

#[cfg(test)]
pub mod test_utils;

pub use employee_repository::EmployeeRepository;
pub use evaluation_repository::{EvaluationCriterionRepository, EvaluationRepository};
pub use factory::{HrRepoFactory, HrRepositories};
