use dioxus::prelude::*;
use ui::EmployeeList;

use crate::Route;

#[component]
pub fn Employees() -> Element {
    let nav = use_navigator();

    rsx! {
        EmployeeList {
            on_new: move |_| {
                nav.push(Route::CreateEmployee {});
            },
        }
    }
}
