use dioxus::prelude::*;
use store::Area;

use crate::client::use_api;
use crate::view_state::ListState;

/// Table of areas. An area still assigned to employees cannot be deleted; the API
/// answers 409 and the list stays as it was.
#[component]
pub fn AreaList(on_new: EventHandler<()>) -> Element {
    let client = use_api();
    let fetch_client = client.clone();
    let mut areas = use_resource(move || {
        let client = fetch_client.clone();
        async move { ListState::from(client.list_areas().await) }
    });

    let delete = use_callback(move |id: i32| {
        let client = client.clone();
        spawn(async move {
            match client.delete_area(id).await {
                Ok(()) => areas.restart(),
                Err(e) => tracing::error!("Failed to delete area {}: {}", id, e),
            }
        });
    });

    let state: ListState<Area> = areas.cloned().unwrap_or_default();

    rsx! {
        div {
            class: "list-view",

            h1 { "Areas" }

            button {
                class: "primary",
                onclick: move |_| on_new.call(()),
                "New area"
            }

            {match state {
                ListState::Loading => rsx! { p { "Loading..." } },
                ListState::Failed(message) => rsx! { p { class: "error", "{message}" } },
                ListState::Ready(rows) => rsx! {
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for area in rows.iter().cloned() {
                                tr {
                                    key: "{area.id}",
                                    td { "{area.name}" }
                                    td {
                                        button {
                                            class: "danger",
                                            onclick: move |_| delete.call(area.id),
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
