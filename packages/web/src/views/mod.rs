mod employees;
pub use employees::Employees;

mod create_employee;
pub use create_employee::CreateEmployee;

mod areas;
pub use areas::Areas;

mod create_area;
pub use create_area::CreateArea;
