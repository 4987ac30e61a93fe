use std::error::Error;
use uuid::Uuid;

use backoffice_domain::models::hr::EmployeeModel;

use crate::store::InMemoryRepository;

pub type EmployeeRepository = InMemoryRepository<EmployeeModel>;

impl InMemoryRepository<EmployeeModel> {
    /// Find the employee ID for an employee number hash (numbers are unique)
    pub async fn find_id_by_employee_number_hash(
        &self,
        employee_number_hash: i64,
    ) -> Result<Option<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self
            .find_ids_by_i64_key("employee_number_hash", employee_number_hash)
            .into_iter()
            .next())
    }

    /// Find the IDs of all employees of a department (hashed name)
    pub async fn find_ids_by_department_hash(
        &self,
        department_hash: i64,
    ) -> Result<Vec<Uuid>, Box<dyn Error + Send + Sync>> {
        Ok(self.find_ids_by_i64_key("department_hash", department_hash))
    }
}
