use dioxus::prelude::*;
use store::Employee;

use crate::client::use_api;
use crate::view_state::ListState;

/// Table of every employee with its area. Deleting a row refetches the list.
#[component]
pub fn EmployeeList(on_new: EventHandler<()>) -> Element {
    let client = use_api();
    let fetch_client = client.clone();
    let mut employees = use_resource(move || {
        let client = fetch_client.clone();
        async move { ListState::from(client.list_employees().await) }
    });

    let delete = use_callback(move |id: i32| {
        let client = client.clone();
        spawn(async move {
            match client.delete_employee(id).await {
                Ok(()) => employees.restart(),
                Err(e) => tracing::error!("Failed to delete employee {}: {}", id, e),
            }
        });
    });

    let state: ListState<Employee> = employees.cloned().unwrap_or_default();

    rsx! {
        div {
            class: "list-view",

            h1 { "Employees" }

            button {
                class: "primary",
                onclick: move |_| on_new.call(()),
                "New employee"
            }

            {match state {
                ListState::Loading => rsx! { p { "Loading..." } },
                ListState::Failed(message) => rsx! { p { class: "error", "{message}" } },
                ListState::Ready(rows) => rsx! {
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "DNI" }
                                th { "Area" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for employee in rows.iter().cloned() {
                                tr {
                                    key: "{employee.id}",
                                    td { "{employee.full_name}" }
                                    td { "{employee.dni}" }
                                    td { "{employee.area.name}" }
                                    td {
                                        button {
                                            class: "danger",
                                            onclick: move |_| delete.call(employee.id),
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
