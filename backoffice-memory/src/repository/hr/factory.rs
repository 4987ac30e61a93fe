use std::sync::Arc;

use super::evaluation_repository::EvaluationCriterionRepository;
use super::{EmployeeRepository, EvaluationRepository};

/// Factory for creating HR module repositories
pub struct HrRepoFactory {
    employee_repository: Arc<EmployeeRepository>,
    evaluation_repository: Arc<EvaluationRepository>,
    evaluation_criterion_repository: Arc<EvaluationCriterionRepository>,
}

impl HrRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            employee_repository: Arc::new(EmployeeRepository::new()),
            evaluation_repository: Arc::new(EvaluationRepository::new()),
            evaluation_criterion_repository: Arc::new(EvaluationCriterionRepository::new()),
        })
    }

    pub fn employee_repo(&self) -> Arc<EmployeeRepository> {
        self.employee_repository.clone()
    }

    pub fn evaluation_repo(&self) -> Arc<EvaluationRepository> {
        self.evaluation_repository.clone()
    }

    pub fn evaluation_criterion_repo(&self) -> Arc<EvaluationCriterionRepository> {
        self.evaluation_criterion_repository.clone()
    }

    /// Build the full set of HR repositories
    pub fn build_all_repos(&self) -> HrRepositories {
        HrRepositories {
            employee_repository: self.employee_repo(),
            evaluation_repository: self.evaluation_repo(),
            evaluation_criterion_repository: self.evaluation_criterion_repo(),
        }
    }
}

/// Container for all HR module repositories
pub struct HrRepositories {
    pub employee_repository: Arc<EmployeeRepository>,
    pub evaluation_repository: Arc<EvaluationRepository>,
    pub evaluation_criterion_repository: Arc<EvaluationCriterionRepository>,
}
