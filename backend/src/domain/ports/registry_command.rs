//! Driving port for creating departments and employees.
//!
//! Inbound adapters hand over payloads that already passed field validation
//! (`NewDepartment`, `NewEmployee`); the port persists them and maps store
//! failures to domain errors.

use async_trait::async_trait;

use crate::domain::{DepartmentWithEmployees, Employee, Error, NewDepartment, NewEmployee};

#[async_trait]
pub trait RegistryCommand: Send + Sync {
    /// Create a department. The result carries an empty employee list.
    async fn create_department(
        &self,
        department: NewDepartment,
    ) -> Result<DepartmentWithEmployees, Error>;

    /// Create an employee.
    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, Error>;
}
