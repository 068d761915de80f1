//! # Database module: PostgreSQL pool, migrations and store backend
//!
//! - [`connect`] opens a [`sqlx::PgPool`] sized from settings.
//! - [`migrate`] applies the embedded migrations in `packages/api/migrations`.
//! - [`PgStore`] implements [`store::DirectoryStore`] on top of the pool.
//!
//! Referential integrity between `employees.area_id` and `areas.id` is owned by the
//! schema (`ON DELETE RESTRICT`); [`PgStore`] translates the resulting foreign-key
//! violations into [`store::StoreError`] variants.

mod pool;
mod postgres;

pub use pool::{connect, migrate};
pub use postgres::PgStore;
