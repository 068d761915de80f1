//! This crate contains all shared UI for the directory client.
//!
//! Components take navigation as [`EventHandler`](dioxus::prelude::EventHandler)
//! props so that routing stays in the platform crate.

mod client;
pub use client::{use_api, ApiClient, ClientError, DEFAULT_API_URL};

mod view_state;
pub use view_state::ListState;

mod navbar;
pub use navbar::Navbar;

mod employee_list;
pub use employee_list::EmployeeList;

mod area_list;
pub use area_list::AreaList;

mod employee_form;
pub use employee_form::{EmployeeDraft, EmployeeForm};

mod area_form;
pub use area_form::AreaForm;
