//! Diesel row types. Internal to the persistence adapter.

use diesel::prelude::*;

use crate::domain::{Department, DepartmentId, Employee, EmployeeId, NewDepartment, NewEmployee};

use super::schema::{departments, employees};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DepartmentRow {
    pub id: i32,
    pub name: String,
    pub location: String,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Self {
            id: DepartmentId::new(row.id),
            name: row.name,
            location: row.location,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = departments)]
pub(crate) struct NewDepartmentRow<'a> {
    pub name: &'a str,
    pub location: &'a str,
}

impl<'a> From<&'a NewDepartment> for NewDepartmentRow<'a> {
    fn from(department: &'a NewDepartment) -> Self {
        Self {
            name: department.name(),
            location: department.location(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: Option<i32>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: EmployeeId::new(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            department_id: row.department_id.map(DepartmentId::new),
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub department_id: Option<i32>,
}

impl<'a> From<&'a NewEmployee> for NewEmployeeRow<'a> {
    fn from(employee: &'a NewEmployee) -> Self {
        Self {
            first_name: employee.first_name(),
            last_name: employee.last_name(),
            email: employee.email().as_ref(),
            department_id: employee.department_id().map(DepartmentId::get),
        }
    }
}
