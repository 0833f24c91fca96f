//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the department and employee ports backed by
//! PostgreSQL via `diesel-async` with `bb8` pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types. Ordering, windowing and filtering run in SQL.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Constraint-backed invariants**: the unique email and the department
//!   reference are enforced by the schema and surface as typed port errors.
//!
//! # Example
//!
//! ```ignore
//! use personnel::outbound::persistence::{DbPool, DieselEmployeeRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/personnel")).await?;
//! let employees = DieselEmployeeRepository::new(pool);
//! ```

mod diesel_department_repository;
mod diesel_employee_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_department_repository::DieselDepartmentRepository;
pub use diesel_employee_repository::DieselEmployeeRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
