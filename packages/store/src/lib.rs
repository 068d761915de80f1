//! # Store crate: employee directory model and persistence contract
//!
//! Shared by the API service (native) and the browser client (`wasm32`), so it
//! carries no database driver. Backends implement [`DirectoryStore`]; the
//! PostgreSQL one lives in the `api` crate, the in-memory one lives here.

pub mod error;
pub mod models;
pub mod payload;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

pub use error::{Entity, StoreError, StoreResult};
pub use models::{Area, Employee, NewArea, NewEmployee};
pub use payload::{AreaPayload, AreaRef, EmployeePayload, FieldError, ValidationErrors};
pub use repo::DirectoryStore;
