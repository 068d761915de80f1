//! # API crate: REST service for the employee directory
//!
//! Exposes CRUD endpoints for areas and employees over JSON, backed by any
//! [`store::DirectoryStore`]. The `directory-api` binary wires it to PostgreSQL
//! (or the in-memory store) using [`settings::Settings`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`db`] | PostgreSQL pool, embedded migrations, and the [`db::PgStore`] backend |
//! | [`error`] | [`ApiError`], the mapping from store failures to HTTP status codes |
//! | [`extract`] | Request extractors that reject with [`ApiError`] instead of axum's defaults |
//! | [`models`] | Database row types and their projection into [`store`] models |
//! | [`routes`] | Handlers for `/`, `/areas` and `/employees` |
//! | [`server`] | [`AppState`], router assembly (CORS, tracing), and serving with graceful shutdown |
//! | [`settings`] | Layered configuration: defaults, `directory.toml`, environment |
//! | [`telemetry`] | `tracing` subscriber setup |
//!
//! ## Endpoints
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | GET | `/` | 200, plain-text health string |
//! | GET / POST | `/areas` | 200 list / 201 created |
//! | GET / PUT / DELETE | `/areas/{id}` | 200 / 200 / 204 |
//! | GET / POST | `/employees` | 200 list / 201 created |
//! | GET / PUT / DELETE | `/employees/{id}` | 200 / 200 / 204 |

pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod server;
pub mod settings;
pub mod telemetry;

pub use error::ApiError;
pub use server::{router, serve, AppState};
pub use settings::Settings;
