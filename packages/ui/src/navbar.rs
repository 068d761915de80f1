use dioxus::prelude::*;

/// Top navigation bar; callers pass the route links as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            {children}
        }
    }
}
