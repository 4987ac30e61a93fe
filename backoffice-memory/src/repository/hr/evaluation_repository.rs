use std::error::Error;
use uuid::Uuid;

use backoffice_domain::models::hr::{EvaluationCriterionModel, EvaluationModel};

use crate::store::InMemoryRepository;

pub type EvaluationRepository = InMemoryRepository<EvaluationModel>;
pub type EvaluationCriterionRepository = InMemoryRepository<EvaluationCriterionModel>;

impl InMemoryRepository<EvaluationModel> {
    /// Find the IDs of all evaluations of an employee
    pub async fn find_ids_by_employee_id(
        &self,
        employee_id: Uuid,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_uuid_key("employee_id", employee_id))
    }

    /// Find the IDs of all evaluations of a review period (hashed)
    pub async fn find_ids_by_period_hash(
        &self,
        period_hash: i64,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_i64_key("period_hash", period_hash))
    }
}

impl InMemoryRepository<EvaluationCriterionModel> {
    /// Find the IDs of all criterion lines of an evaluation
    pub async fn find_ids_by_evaluation_id(
        &self,
        evaluation_id: Uuid,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_uuid_key("evaluation_id", evaluation_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::hr::test_utils::create_test_evaluation;
    use backoffice_domain::repository::CreateBatch;

    #[tokio::test]
    async fn test_find_ids_by_employee_id(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = EvaluationRepository::new();
        let employee_id = Uuid::new_v4();
        let h1 = create_test_evaluation(employee_id, "2026-H1");
        let h2 = create_test_evaluation(employee_id, "2026-H2");
        let other = create_test_evaluation(Uuid::new_v4(), "2026-H1");
        repo.create_batch(vec![h1.clone(), h2.clone(), other]).await?;

        let mut found = repo.find_ids_by_employee_id(employee_id).await?;
        found.sort();
        let mut expected = vec![h1.id, h2.id];
        expected.sort();
        assert_eq!(found, expected);
        Ok(())
    }
}
