pub mod budget_line_repository;
pub mod factory;
pub mod project_repository;

#[cfg(test)]
pub mod test_utils;

pub use budget_line_repository::BudgetLineRepository;
pub use factory::{ProjectsRepoFactory, ProjectsRepositories};
pub use project_repository::ProjectRepository;
