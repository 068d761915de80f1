use dioxus::prelude::*;

use ui::{ApiClient, Navbar};
use views::{Areas, CreateArea, CreateEmployee, Employees};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[redirect("/", || Route::Employees {})]
        #[route("/employees")]
        Employees {},
        #[route("/create-employee")]
        CreateEmployee {},
        #[route("/areas")]
        Areas {},
        #[route("/create-area")]
        CreateArea {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ApiClient::default);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Navigation shared by every page.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {
            span { class: "brand", "Directory" }
            Link { to: Route::Employees {}, "Employees" }
            Link { to: Route::Areas {}, "Areas" }
        }
        main {
            class: "content",
            Outlet::<Route> {}
        }
    }
}
