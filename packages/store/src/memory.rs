use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::{Entity, StoreError, StoreResult};
use crate::models::{Area, Employee, NewArea, NewEmployee};
use crate::repo::DirectoryStore;

/// In-memory DirectoryStore for testing and the `memory` backend.
///
/// Ids come from per-table sequences starting at 1 and are never reused,
/// matching `SERIAL` columns.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

#[derive(Debug, Default)]
struct Tables {
    areas: BTreeMap<i32, Area>,
    employees: BTreeMap<i32, NewEmployee>,
    area_seq: i32,
    employee_seq: i32,
}

impl Tables {
    fn area(&self, id: i32) -> StoreResult<Area> {
        self.areas
            .get(&id)
            .cloned()
            .ok_or(StoreError::UnknownArea(id))
    }

    fn expand(&self, id: i32, row: &NewEmployee) -> StoreResult<Employee> {
        let area = self.area(row.area_id)?;
        Ok(row.clone().into_employee(id, area))
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> StoreResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl DirectoryStore for MemoryStore {
    async fn list_areas(&self) -> StoreResult<Vec<Area>> {
        Ok(self.tables()?.areas.values().cloned().collect())
    }

    async fn get_area(&self, id: i32) -> StoreResult<Option<Area>> {
        Ok(self.tables()?.areas.get(&id).cloned())
    }

    async fn create_area(&self, area: &NewArea) -> StoreResult<Area> {
        let mut tables = self.tables()?;
        tables.area_seq += 1;
        let created = Area {
            id: tables.area_seq,
            name: area.name.clone(),
        };
        tables.areas.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_area(&self, id: i32, area: &NewArea) -> StoreResult<Area> {
        let mut tables = self.tables()?;
        let existing = tables
            .areas
            .get_mut(&id)
            .ok_or(StoreError::not_found(Entity::Area, id))?;
        existing.name = area.name.clone();
        Ok(existing.clone())
    }

    async fn delete_area(&self, id: i32) -> StoreResult<()> {
        let mut tables = self.tables()?;
        if !tables.areas.contains_key(&id) {
            return Err(StoreError::not_found(Entity::Area, id));
        }
        if tables.employees.values().any(|e| e.area_id == id) {
            return Err(StoreError::AreaInUse { id });
        }
        tables.areas.remove(&id);
        Ok(())
    }

    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        let tables = self.tables()?;
        tables
            .employees
            .iter()
            .map(|(id, row)| tables.expand(*id, row))
            .collect()
    }

    async fn get_employee(&self, id: i32) -> StoreResult<Option<Employee>> {
        let tables = self.tables()?;
        tables
            .employees
            .get(&id)
            .map(|row| tables.expand(id, row))
            .transpose()
    }

    async fn create_employee(&self, employee: &NewEmployee) -> StoreResult<Employee> {
        let mut tables = self.tables()?;
        let area = tables.area(employee.area_id)?;
        tables.employee_seq += 1;
        let id = tables.employee_seq;
        tables.employees.insert(id, employee.clone());
        Ok(employee.clone().into_employee(id, area))
    }

    async fn update_employee(&self, id: i32, employee: &NewEmployee) -> StoreResult<Employee> {
        let mut tables = self.tables()?;
        if !tables.employees.contains_key(&id) {
            return Err(StoreError::not_found(Entity::Employee, id));
        }
        let area = tables.area(employee.area_id)?;
        tables.employees.insert(id, employee.clone());
        Ok(employee.clone().into_employee(id, area))
    }

    async fn delete_employee(&self, id: i32) -> StoreResult<()> {
        self.tables()?
            .employees
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::not_found(Entity::Employee, id))
    }
}
