//! PostgreSQL-backed `EmployeeRepository` using Diesel.
//!
//! Email uniqueness and the department reference are enforced by table
//! constraints; violations come back as typed repository errors.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::PageRequest;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{DepartmentId, Employee, EmployeeFilter, NewEmployee};

use super::error_mapping::{
    map_employee_diesel_error, map_employee_pool_error, map_employee_read_error,
};
use super::models::{EmployeeRow, NewEmployeeRow};
use super::pool::DbPool;
use super::schema::employees;

/// Diesel implementation of the employee port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_employee_pool_error)?;
        let new_row = NewEmployeeRow::from(employee);

        let row = diesel::insert_into(employees::table)
            .values(&new_row)
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_employee_diesel_error(err, new_row.email, new_row.department_id))?;

        Ok(row.into())
    }

    async fn list(
        &self,
        filter: EmployeeFilter,
        page: PageRequest,
    ) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_employee_pool_error)?;

        let mut query = employees::table
            .select(EmployeeRow::as_select())
            .into_boxed();
        if let EmployeeFilter::Department(id) = filter {
            query = query.filter(employees::department_id.eq(id.get()));
        }

        let rows: Vec<EmployeeRow> = query
            .order(employees::id.asc())
            .offset(page.sql_offset())
            .limit(page.sql_limit())
            .load(&mut conn)
            .await
            .map_err(map_employee_read_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn list_for_departments(
        &self,
        department_ids: Vec<DepartmentId>,
    ) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        if department_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get().await.map_err(map_employee_pool_error)?;
        let ids: Vec<i32> = department_ids.into_iter().map(DepartmentId::get).collect();

        let rows: Vec<EmployeeRow> = employees::table
            .filter(employees::department_id.eq_any(ids))
            .select(EmployeeRow::as_select())
            .order(employees::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_employee_read_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }
}
