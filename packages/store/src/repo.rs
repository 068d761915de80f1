//! # Repository: the persistence contract behind the HTTP handlers
//!
//! [`DirectoryStore`] is the async interface every backend implements. Handlers only
//! ever hold an `Arc<dyn DirectoryStore>`, so the same routes run against PostgreSQL
//! in production and against [`crate::MemoryStore`] in tests.
//!
//! ## Contract
//!
//! | Method | Missing id | Other rules |
//! |--------|-----------|-------------|
//! | `list_*` | | Ordered by ascending id. Employees carry their area. |
//! | `get_*` | `Ok(None)` | |
//! | `create_employee` / `update_employee` | `NotFound` (update) | `UnknownArea` when `area_id` does not exist. |
//! | `update_area` | `NotFound` | |
//! | `delete_area` | `NotFound` | `AreaInUse` while any employee references it. |
//! | `delete_employee` | `NotFound` | Repeating a delete is an error, not a no-op. |

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Area, Employee, NewArea, NewEmployee};

/// Async storage for areas and employees.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    async fn list_areas(&self) -> StoreResult<Vec<Area>>;
    async fn get_area(&self, id: i32) -> StoreResult<Option<Area>>;
    async fn create_area(&self, area: &NewArea) -> StoreResult<Area>;
    async fn update_area(&self, id: i32, area: &NewArea) -> StoreResult<Area>;
    async fn delete_area(&self, id: i32) -> StoreResult<()>;

    async fn list_employees(&self) -> StoreResult<Vec<Employee>>;
    async fn get_employee(&self, id: i32) -> StoreResult<Option<Employee>>;
    async fn create_employee(&self, employee: &NewEmployee) -> StoreResult<Employee>;
    async fn update_employee(&self, id: i32, employee: &NewEmployee) -> StoreResult<Employee>;
    async fn delete_employee(&self, id: i32) -> StoreResult<()>;
}
