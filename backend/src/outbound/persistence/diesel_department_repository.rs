//! PostgreSQL-backed `DepartmentRepository` using Diesel.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::PageRequest;

use crate::domain::ports::{DepartmentRepository, DepartmentRepositoryError};
use crate::domain::{Department, DepartmentId, NewDepartment};

use super::error_mapping::{map_department_diesel_error, map_department_pool_error};
use super::models::{DepartmentRow, NewDepartmentRow};
use super::pool::DbPool;
use super::schema::departments;

/// Diesel implementation of the department port.
#[derive(Clone)]
pub struct DieselDepartmentRepository {
    pool: DbPool,
}

impl DieselDepartmentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for DieselDepartmentRepository {
    async fn insert(
        &self,
        department: &NewDepartment,
    ) -> Result<Department, DepartmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_department_pool_error)?;

        let row = diesel::insert_into(departments::table)
            .values(NewDepartmentRow::from(department))
            .returning(DepartmentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_department_diesel_error)?;

        Ok(row.into())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Department>, DepartmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_department_pool_error)?;

        let rows: Vec<DepartmentRow> = departments::table
            .select(DepartmentRow::as_select())
            .order(departments::id.asc())
            .offset(page.sql_offset())
            .limit(page.sql_limit())
            .load(&mut conn)
            .await
            .map_err(map_department_diesel_error)?;

        Ok(rows.into_iter().map(Department::from).collect())
    }

    async fn exists(&self, id: DepartmentId) -> Result<bool, DepartmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_department_pool_error)?;

        diesel::select(exists(departments::table.filter(departments::id.eq(id.get()))))
            .get_result(&mut conn)
            .await
            .map_err(map_department_diesel_error)
    }
}
