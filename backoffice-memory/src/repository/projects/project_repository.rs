use std::error::Error;
use uuid::Uuid;

use backoffice_domain::models::projects::ProjectModel;

use crate::store::InMemoryRepository;

pub type ProjectRepository = InMemoryRepository<ProjectModel>;

impl InMemoryRepository<ProjectModel> {
    /// Find the project ID for a code hash (codes are unique)
    pub async fn find_id_by_code_hash(
        &self,
        code_hash: i64,
    ) -> Result<Option<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .find_ids_by_i64_key("code_hash", code_hash)
            .into_iter()
            .next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::projects::test_utils::create_test_project;
    use backoffice_domain::repository::{CreateBatch, FindById};
    use backoffice_domain::utils::hash_as_i64;

    #[tokio::test]
    async fn test_find_id_by_code_hash() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = ProjectRepository::new();
        let project = create_test_project();
        let code = project.code.clone();
        repo.create_batch(vec![project.clone()]).await?;

        let code_hash = hash_as_i64(&code.as_str()).unwrap();
        assert_eq!(repo.find_id_by_code_hash(code_hash).await?, Some(project.id));

        let idx = repo.find_by_id(project.id).await?;
        assert_eq!(idx.map(|i| i.code_hash), Some(Some(code_hash)));
        Ok(())
    }
}
