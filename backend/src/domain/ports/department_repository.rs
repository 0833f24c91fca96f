//! Driven port for department storage.
//!
//! The store assigns identifiers, persists rows and answers ordered,
//! windowed reads. No update or delete operations exist.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{Department, DepartmentId, NewDepartment};

use super::define_port_error;

define_port_error! {
    /// Errors raised by department repository adapters.
    pub enum DepartmentRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "department repository connection failed: {message}",
        /// Query or insert failed during execution.
        Query { message: String } => "department repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Persist a department and return it with its assigned identifier.
    async fn insert(&self, department: &NewDepartment)
    -> Result<Department, DepartmentRepositoryError>;

    /// Departments ordered by ascending id, windowed by `page`.
    async fn list(&self, page: PageRequest) -> Result<Vec<Department>, DepartmentRepositoryError>;

    /// Whether a department with `id` exists.
    async fn exists(&self, id: DepartmentId) -> Result<bool, DepartmentRepositoryError>;
}
