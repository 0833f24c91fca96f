//! Registry service: the single path through which departments and
//! employees are created or listed.
//!
//! The service holds its repositories explicitly, so each server (or test)
//! builds its own instance over whichever store it needs. Department rosters
//! are resolved with a second, explicit query on `employees.department_id`
//! at read time.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use pagination::PageRequest;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    DepartmentRepository, DepartmentRepositoryError, EmployeeRepository, EmployeeRepositoryError,
    RegistryCommand, RegistryQuery,
};
use crate::domain::{
    DepartmentId, DepartmentWithEmployees, Employee, EmployeeFilter, Error, FieldViolation,
    NewDepartment, NewEmployee, ValidationErrors, ViolationCode,
};

/// Optional behaviour toggles for [`RegistryService`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Reject employees whose `department_id` does not resolve. Off by
    /// default: a dangling reference is accepted as-is.
    pub verify_department_exists: bool,
}

/// Registry service implementing [`RegistryCommand`] and [`RegistryQuery`].
pub struct RegistryService<D, E> {
    departments: Arc<D>,
    employees: Arc<E>,
    options: RegistryOptions,
}

impl<D, E> RegistryService<D, E> {
    /// Create a service over the given repositories with default options.
    pub fn new(departments: Arc<D>, employees: Arc<E>) -> Self {
        Self {
            departments,
            employees,
            options: RegistryOptions::default(),
        }
    }

    /// Replace the behaviour toggles.
    #[must_use]
    pub fn with_options(mut self, options: RegistryOptions) -> Self {
        self.options = options;
        self
    }
}

impl<D, E> RegistryService<D, E>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
{
    fn map_department_error(error: DepartmentRepositoryError) -> Error {
        match error {
            DepartmentRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("department store unavailable: {message}"))
            }
            DepartmentRepositoryError::Query { message } => {
                Error::internal(format!("department store error: {message}"))
            }
        }
    }

    fn map_employee_error(error: EmployeeRepositoryError) -> Error {
        match error {
            EmployeeRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("employee store unavailable: {message}"))
            }
            EmployeeRepositoryError::Query { message } => {
                Error::internal(format!("employee store error: {message}"))
            }
            EmployeeRepositoryError::DuplicateEmail { email } => {
                let violation = FieldViolation::new(
                    "email",
                    ViolationCode::DuplicateEmail,
                    format!("{email} is already registered"),
                );
                Error::conflict("email already registered")
                    .with_details(json!({ "errors": [violation] }))
            }
            EmployeeRepositoryError::UnknownDepartment { department_id } => {
                Self::unknown_department(DepartmentId::new(department_id))
            }
        }
    }

    fn unknown_department(id: DepartmentId) -> Error {
        Error::from(ValidationErrors::from(FieldViolation::new(
            "department_id",
            ViolationCode::UnknownDepartment,
            format!("department {id} does not exist"),
        )))
    }

    async fn ensure_department_exists(&self, id: DepartmentId) -> Result<(), Error> {
        let exists = self
            .departments
            .exists(id)
            .await
            .map_err(Self::map_department_error)?;
        if exists {
            Ok(())
        } else {
            Err(Self::unknown_department(id))
        }
    }
}

#[async_trait]
impl<D, E> RegistryCommand for RegistryService<D, E>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
{
    async fn create_department(
        &self,
        department: NewDepartment,
    ) -> Result<DepartmentWithEmployees, Error> {
        let created = self
            .departments
            .insert(&department)
            .await
            .map_err(Self::map_department_error)?;
        info!(department_id = %created.id, "department created");
        Ok(DepartmentWithEmployees::without_employees(created))
    }

    async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, Error> {
        if let (true, Some(department_id)) = (
            self.options.verify_department_exists,
            employee.department_id(),
        ) {
            self.ensure_department_exists(department_id).await?;
        }

        let created = self
            .employees
            .insert(&employee)
            .await
            .map_err(Self::map_employee_error)?;
        info!(
            employee_id = %created.id,
            department_id = ?created.department_id.map(DepartmentId::get),
            "employee created"
        );
        Ok(created)
    }
}

#[async_trait]
impl<D, E> RegistryQuery for RegistryService<D, E>
where
    D: DepartmentRepository,
    E: EmployeeRepository,
{
    async fn list_departments(
        &self,
        page: PageRequest,
    ) -> Result<Vec<DepartmentWithEmployees>, Error> {
        let departments = self
            .departments
            .list(page)
            .await
            .map_err(Self::map_department_error)?;
        if departments.is_empty() {
            return Ok(Vec::new());
        }

        let ids = departments.iter().map(|department| department.id).collect();
        let employees = self
            .employees
            .list_for_departments(ids)
            .await
            .map_err(Self::map_employee_error)?;
        debug!(
            departments = departments.len(),
            employees = employees.len(),
            "resolved department rosters"
        );

        let mut rosters: HashMap<DepartmentId, Vec<Employee>> = HashMap::new();
        for employee in employees {
            if let Some(department_id) = employee.department_id {
                rosters.entry(department_id).or_default().push(employee);
            }
        }

        Ok(departments
            .into_iter()
            .map(|department| {
                let employees = rosters.remove(&department.id).unwrap_or_default();
                DepartmentWithEmployees {
                    department,
                    employees,
                }
            })
            .collect())
    }

    async fn list_employees(
        &self,
        filter: EmployeeFilter,
        page: PageRequest,
    ) -> Result<Vec<Employee>, Error> {
        self.employees
            .list(filter, page)
            .await
            .map_err(Self::map_employee_error)
    }
}
