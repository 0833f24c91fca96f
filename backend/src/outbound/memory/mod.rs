//! In-process registry store.
//!
//! Backs both repository ports with vectors behind one mutex. Used when no
//! database URL is configured and by HTTP tests. Identifiers start at 1 and
//! increase by one per insert. Email uniqueness is enforced; the department
//! reference is not, so an employee may point at a department that does not
//! exist.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use pagination::PageRequest;
use tracing::warn;

use crate::domain::ports::{
    DepartmentRepository, DepartmentRepositoryError, EmployeeRepository, EmployeeRepositoryError,
};
use crate::domain::{
    Department, DepartmentId, Employee, EmployeeFilter, EmployeeId, NewDepartment, NewEmployee,
};

#[derive(Debug, Default)]
struct Tables {
    departments: Vec<Department>,
    employees: Vec<Employee>,
    last_department_id: i32,
    last_employee_id: i32,
}

/// Shared in-memory tables implementing [`DepartmentRepository`] and
/// [`EmployeeRepository`].
#[derive(Debug, Default)]
pub struct InMemoryRegistryStore {
    tables: Mutex<Tables>,
}

impl InMemoryRegistryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, String> {
        self.tables.lock().map_err(|err| {
            warn!(error = %err, "in-memory registry lock poisoned");
            "registry store lock poisoned".to_owned()
        })
    }
}

fn next_id(last: &mut i32) -> Option<i32> {
    *last = last.checked_add(1)?;
    Some(*last)
}

#[async_trait]
impl DepartmentRepository for InMemoryRegistryStore {
    async fn insert(
        &self,
        department: &NewDepartment,
    ) -> Result<Department, DepartmentRepositoryError> {
        let mut tables = self.lock().map_err(DepartmentRepositoryError::query)?;
        let id = next_id(&mut tables.last_department_id)
            .ok_or_else(|| DepartmentRepositoryError::query("department id space exhausted"))?;
        let created = Department {
            id: DepartmentId::new(id),
            name: department.name().to_owned(),
            location: department.location().to_owned(),
        };
        tables.departments.push(created.clone());
        Ok(created)
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Department>, DepartmentRepositoryError> {
        let tables = self.lock().map_err(DepartmentRepositoryError::query)?;
        Ok(page.apply(tables.departments.iter().cloned()).collect())
    }

    async fn exists(&self, id: DepartmentId) -> Result<bool, DepartmentRepositoryError> {
        let tables = self.lock().map_err(DepartmentRepositoryError::query)?;
        Ok(tables.departments.iter().any(|department| department.id == id))
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryRegistryStore {
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, EmployeeRepositoryError> {
        let mut tables = self.lock().map_err(EmployeeRepositoryError::query)?;
        let email = employee.email().as_ref();
        if tables.employees.iter().any(|existing| existing.email == email) {
            return Err(EmployeeRepositoryError::duplicate_email(email));
        }
        let id = next_id(&mut tables.last_employee_id)
            .ok_or_else(|| EmployeeRepositoryError::query("employee id space exhausted"))?;
        let created = Employee {
            id: EmployeeId::new(id),
            first_name: employee.first_name().to_owned(),
            last_name: employee.last_name().to_owned(),
            email: email.to_owned(),
            department_id: employee.department_id(),
        };
        tables.employees.push(created.clone());
        Ok(created)
    }

    async fn list(
        &self,
        filter: EmployeeFilter,
        page: PageRequest,
    ) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let tables = self.lock().map_err(EmployeeRepositoryError::query)?;
        let matching = tables
            .employees
            .iter()
            .filter(|employee| filter.matches(employee))
            .cloned();
        Ok(page.apply(matching).collect())
    }

    async fn list_for_departments(
        &self,
        department_ids: Vec<DepartmentId>,
    ) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let tables = self.lock().map_err(EmployeeRepositoryError::query)?;
        Ok(tables
            .employees
            .iter()
            .filter(|employee| {
                employee
                    .department_id
                    .is_some_and(|id| department_ids.contains(&id))
            })
            .cloned()
            .collect())
    }
}
