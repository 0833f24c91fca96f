//! Driving port for paginated department and employee reads.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{DepartmentWithEmployees, Employee, EmployeeFilter, Error};

#[async_trait]
pub trait RegistryQuery: Send + Sync {
    /// Departments ordered by id, each with its current employees.
    async fn list_departments(
        &self,
        page: PageRequest,
    ) -> Result<Vec<DepartmentWithEmployees>, Error>;

    /// Employees ordered by id, optionally restricted to one department.
    async fn list_employees(
        &self,
        filter: EmployeeFilter,
        page: PageRequest,
    ) -> Result<Vec<Employee>, Error>;
}
