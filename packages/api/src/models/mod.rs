//! Database row types.

mod area;
mod employee;

pub use area::AreaRow;
pub use employee::{EmployeeRow, EMPLOYEE_COLUMNS};
