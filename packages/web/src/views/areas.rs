use dioxus::prelude::*;
use ui::AreaList;

use crate::Route;

#[component]
pub fn Areas() -> Element {
    let nav = use_navigator();

    rsx! {
        AreaList {
            on_new: move |_| {
                nav.push(Route::CreateArea {});
            },
        }
    }
}
