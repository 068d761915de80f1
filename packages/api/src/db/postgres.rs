use async_trait::async_trait;
use sqlx::PgPool;
use store::{
    Area, DirectoryStore, Employee, Entity, NewArea, NewEmployee, StoreError, StoreResult,
};

use crate::models::{AreaRow, EmployeeRow, EMPLOYEE_COLUMNS};

/// [`DirectoryStore`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation())
}

/// Employee writes fail on the FK only when `area_id` points nowhere.
fn employee_write_error(err: sqlx::Error, area_id: i32) -> StoreError {
    if is_foreign_key_violation(&err) {
        StoreError::UnknownArea(area_id)
    } else {
        backend(err)
    }
}

#[async_trait]
impl DirectoryStore for PgStore {
    async fn list_areas(&self) -> StoreResult<Vec<Area>> {
        let rows: Vec<AreaRow> = sqlx::query_as("SELECT id, name FROM areas ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(AreaRow::into_area).collect())
    }

    async fn get_area(&self, id: i32) -> StoreResult<Option<Area>> {
        let row: Option<AreaRow> = sqlx::query_as("SELECT id, name FROM areas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;
        Ok(row.map(AreaRow::into_area))
    }

    async fn create_area(&self, area: &NewArea) -> StoreResult<Area> {
        let row: AreaRow = sqlx::query_as("INSERT INTO areas (name) VALUES ($1) RETURNING id, name")
            .bind(&area.name)
            .fetch_one(&self.pool)
            .await
            .map_err(backend)?;
        Ok(row.into_area())
    }

    async fn update_area(&self, id: i32, area: &NewArea) -> StoreResult<Area> {
        let row: Option<AreaRow> =
            sqlx::query_as("UPDATE areas SET name = $1 WHERE id = $2 RETURNING id, name")
                .bind(&area.name)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(backend)?;
        row.map(AreaRow::into_area)
            .ok_or(StoreError::not_found(Entity::Area, id))
    }

    async fn delete_area(&self, id: i32) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM areas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                if is_foreign_key_violation(&err) {
                    StoreError::AreaInUse { id }
                } else {
                    backend(err)
                }
            })?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(Entity::Area, id));
        }
        Ok(())
    }

    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        let sql = format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees e JOIN areas a ON a.id = e.area_id ORDER BY e.id"
        );
        let rows: Vec<EmployeeRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;
        Ok(rows.into_iter().map(EmployeeRow::into_employee).collect())
    }

    async fn get_employee(&self, id: i32) -> StoreResult<Option<Employee>> {
        let sql = format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees e JOIN areas a ON a.id = e.area_id WHERE e.id = $1"
        );
        let row: Option<EmployeeRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;
        Ok(row.map(EmployeeRow::into_employee))
    }

    async fn create_employee(&self, employee: &NewEmployee) -> StoreResult<Employee> {
        let sql = format!(
            "WITH e AS (
                INSERT INTO employees (full_name, dni, birth_date, is_developer, description, area_id)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
            )
            SELECT {EMPLOYEE_COLUMNS} FROM e JOIN areas a ON a.id = e.area_id"
        );
        let row: EmployeeRow = sqlx::query_as(&sql)
            .bind(&employee.full_name)
            .bind(&employee.dni)
            .bind(employee.birth_date)
            .bind(employee.is_developer)
            .bind(&employee.description)
            .bind(employee.area_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| employee_write_error(err, employee.area_id))?;
        Ok(row.into_employee())
    }

    async fn update_employee(&self, id: i32, employee: &NewEmployee) -> StoreResult<Employee> {
        let sql = format!(
            "WITH e AS (
                UPDATE employees
                SET full_name = $1, dni = $2, birth_date = $3, is_developer = $4,
                    description = $5, area_id = $6
                WHERE id = $7
                RETURNING *
            )
            SELECT {EMPLOYEE_COLUMNS} FROM e JOIN areas a ON a.id = e.area_id"
        );
        let row: Option<EmployeeRow> = sqlx::query_as(&sql)
            .bind(&employee.full_name)
            .bind(&employee.dni)
            .bind(employee.birth_date)
            .bind(employee.is_developer)
            .bind(&employee.description)
            .bind(employee.area_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| employee_write_error(err, employee.area_id))?;
        row.map(EmployeeRow::into_employee)
            .ok_or(StoreError::not_found(Entity::Employee, id))
    }

    async fn delete_employee(&self, id: i32) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(Entity::Employee, id));
        }
        Ok(())
    }
}
