//! Domain primitives, ports and the registry service.
//!
//! Purpose: Define strongly typed department and employee entities used by
//! the HTTP and persistence layers. Payload types validate on construction,
//! so anything reaching a port has already passed field checks.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - NewDepartment / NewEmployee: validated create payloads.
//! - RegistryService: implements the driving ports over two repositories.

pub mod department;
pub mod employee;
pub mod error;
pub mod ports;
pub mod registry_service;
pub mod trace_id;
pub mod validation;

pub use self::department::{
    DEPARTMENT_TEXT_MAX, Department, DepartmentId, DepartmentWithEmployees, NewDepartment,
};
pub use self::employee::{
    EMAIL_LOCAL_MAX, EMAIL_MAX, EMPLOYEE_NAME_MAX, Email, Employee, EmployeeFilter, EmployeeId,
    NewEmployee,
};
pub use self::error::{Error, ErrorCode};
pub use self::registry_service::{RegistryOptions, RegistryService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{FieldViolation, ValidationErrors, ViolationCode};
