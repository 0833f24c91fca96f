//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`RegistryCommand`, `RegistryQuery`) are called by inbound
//! adapters; driven ports (`DepartmentRepository`, `EmployeeRepository`) are
//! implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod department_repository;
mod employee_repository;
mod registry_command;
mod registry_query;

#[cfg(test)]
pub use department_repository::MockDepartmentRepository;
pub use department_repository::{DepartmentRepository, DepartmentRepositoryError};
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeeRepository, EmployeeRepositoryError};
pub use registry_command::RegistryCommand;
pub use registry_query::RegistryQuery;
