use std::sync::Arc;

use super::{BudgetLineRepository, ProjectRepository};

/// Factory for creating projects module repositories
pub struct ProjectsRepoFactory {
    project_repository: Arc<ProjectRepository>,
    budget_line_repository: Arc<BudgetLineRepository>,
}

impl ProjectsRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            project_repository: Arc::new(ProjectRepository::new()),
            budget_line_repository: Arc::new(BudgetLineRepository::new()),
        })
    }

    pub fn project_repo(&self) -> Arc<ProjectRepository> {
        self.project_repository.clone()
    }

    pub fn budget_line_repo(&self) -> Arc<BudgetLineRepository> {
        self.budget_line_repository.clone()
    }

    /// Build the full set of projects repositories
    pub fn build_all_repos(&self) -> ProjectsRepositories {
        ProjectsRepositories {
            project_repository: self.project_repo(),
            budget_line_repository: self.budget_line_repo(),
        }
    }
}

/// Container for all projects module repositories
pub struct ProjectsRepositories {
    pub project_repository: Arc<ProjectRepository>,
    pub budget_line_repository: Arc<BudgetLineRepository>,
}
