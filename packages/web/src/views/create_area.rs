use dioxus::prelude::*;
use store::Area;
use ui::AreaForm;

use crate::Route;

#[component]
pub fn CreateArea() -> Element {
    let nav = use_navigator();

    rsx! {
        AreaForm {
            on_saved: move |area: Area| {
                tracing::info!(id = area.id, "Area saved");
                nav.push(Route::Areas {});
            },
        }
    }
}
