//! Create-employee page; returns to the list once the API accepts the record.

use dioxus::prelude::*;
use store::Employee;
use ui::EmployeeForm;

use crate::Route;

#[component]
pub fn CreateEmployee() -> Element {
    let nav = use_navigator();

    rsx! {
        EmployeeForm {
            on_saved: move |employee: Employee| {
                tracing::info!(id = employee.id, "Employee saved");
                nav.push(Route::Employees {});
            },
        }
    }
}
