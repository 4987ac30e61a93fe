use std::error::Error;
use uuid::Uuid;

use backoffice_domain::models::projects::BudgetLineModel;

use crate::store::InMemoryRepository;

pub type BudgetLineRepository = InMemoryRepository<BudgetLineModel>;

impl InMemoryRepository<BudgetLineModel> {
    /// Find the IDs of all budget lines of a project
    pub async fn find_ids_by_project_id(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_uuid_key("project_id", project_id))
    }
}
