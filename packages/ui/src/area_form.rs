use dioxus::prelude::*;
use store::{Area, AreaPayload};

use crate::client::use_api;

/// Create-area form.
#[component]
pub fn AreaForm(on_saved: EventHandler<Area>) -> Element {
    let client = use_api();
    let mut name = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let payload = AreaPayload { name: Some(name()) };
        saving.set(true);
        spawn(async move {
            match client.create_area(&payload).await {
                Ok(area) => on_saved.call(area),
                Err(e) => {
                    tracing::error!("Failed to create area: {}", e);
                    saving.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "form-view",

            h1 { "New area" }

            form {
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { r#for: "area-name", "Name" }
                    input {
                        id: "area-name",
                        r#type: "text",
                        required: true,
                        value: "{name}",
                        oninput: move |evt: FormEvent| name.set(evt.value()),
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
