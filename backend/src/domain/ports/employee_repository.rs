//! Driven port for employee storage.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{DepartmentId, Employee, EmployeeFilter, NewEmployee};

use super::define_port_error;

define_port_error! {
    /// Errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "employee repository connection failed: {message}",
        /// Query or insert failed during execution.
        Query { message: String } => "employee repository query failed: {message}",
        /// Another employee already holds this email.
        DuplicateEmail { email: String } => "email already registered: {email}",
        /// The store enforces the department reference and it does not resolve.
        UnknownDepartment { department_id: i32 } => "department {department_id} does not exist",
    }
}

/// Port for employee storage.
///
/// Email uniqueness is enforced here, at insert time, by the store itself.
/// Whether an unknown `department_id` is rejected depends on the adapter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Persist an employee and return it with its assigned identifier.
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, EmployeeRepositoryError>;

    /// Employees passing `filter`, ordered by ascending id, windowed by `page`.
    async fn list(
        &self,
        filter: EmployeeFilter,
        page: PageRequest,
    ) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Every employee referencing one of `department_ids`, ordered by id.
    async fn list_for_departments(
        &self,
        department_ids: Vec<DepartmentId>,
    ) -> Result<Vec<Employee>, EmployeeRepositoryError>;
}
