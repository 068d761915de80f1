//! # Create-employee form
//!
//! [`EmployeeDraft`] is the local form state; it holds exactly what the inputs show
//! (strings for the date and the selected area) and converts to an
//! [`EmployeePayload`] on submit. The API does the validation: the form relies on
//! HTML `required` attributes and logs a rejected submission without changing state.

use dioxus::prelude::*;
use store::{AreaRef, Employee, EmployeePayload};

use crate::client::use_api;
use crate::view_state::ListState;

/// Current contents of the employee form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployeeDraft {
    pub full_name: String,
    pub dni: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`.
    pub birth_date: String,
    pub is_developer: bool,
    pub description: String,
    /// Selected option value; empty until an area is picked.
    pub area_id: String,
}

impl EmployeeDraft {
    pub fn to_payload(&self) -> EmployeePayload {
        EmployeePayload {
            full_name: Some(self.full_name.clone()),
            dni: Some(self.dni.clone()),
            birth_date: Some(self.birth_date.clone()),
            is_developer: Some(self.is_developer),
            description: Some(self.description.clone()).filter(|d| !d.trim().is_empty()),
            area_id: Some(self.area_id.clone())
                .filter(|a| !a.is_empty())
                .map(AreaRef::Text),
        }
    }
}

#[component]
pub fn EmployeeForm(on_saved: EventHandler<Employee>) -> Element {
    let client = use_api();
    let fetch_client = client.clone();
    let areas = use_resource(move || {
        let client = fetch_client.clone();
        async move { ListState::from(client.list_areas().await) }
    });
    let mut draft = use_signal(EmployeeDraft::default);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let payload = draft.read().to_payload();
        saving.set(true);
        spawn(async move {
            match client.create_employee(&payload).await {
                Ok(employee) => on_saved.call(employee),
                Err(e) => {
                    tracing::error!("Failed to create employee: {}", e);
                    saving.set(false);
                }
            }
        });
    };

    let current = draft();
    let areas = areas.cloned().unwrap_or_default();

    rsx! {
        div {
            class: "form-view",

            h1 { "New employee" }

            form {
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { r#for: "employee-full-name", "Full name" }
                    input {
                        id: "employee-full-name",
                        r#type: "text",
                        required: true,
                        value: "{current.full_name}",
                        oninput: move |evt: FormEvent| draft.write().full_name = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "employee-dni", "DNI" }
                    input {
                        id: "employee-dni",
                        r#type: "text",
                        required: true,
                        value: "{current.dni}",
                        oninput: move |evt: FormEvent| draft.write().dni = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "employee-birth-date", "Birth date" }
                    input {
                        id: "employee-birth-date",
                        r#type: "date",
                        required: true,
                        value: "{current.birth_date}",
                        oninput: move |evt: FormEvent| draft.write().birth_date = evt.value(),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "employee-area", "Area" }
                    select {
                        id: "employee-area",
                        required: true,
                        value: "{current.area_id}",
                        onchange: move |evt: FormEvent| draft.write().area_id = evt.value(),
                        option { value: "", disabled: true, "Select an area" }
                        for area in areas.items().iter() {
                            option {
                                key: "{area.id}",
                                value: "{area.id}",
                                "{area.name}"
                            }
                        }
                    }
                }

                div {
                    class: "form-field checkbox",
                    input {
                        id: "employee-is-developer",
                        r#type: "checkbox",
                        checked: current.is_developer,
                        onchange: move |_| {
                            let mut draft = draft.write();
                            draft.is_developer = !draft.is_developer;
                        },
                    }
                    label { r#for: "employee-is-developer", "Developer" }
                }

                div {
                    class: "form-field",
                    label { r#for: "employee-description", "Description" }
                    textarea {
                        id: "employee-description",
                        value: "{current.description}",
                        oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                    }
                }

                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: saving(),
                    "Save"
                }
            }
        }
    }
}
