use dioxus::prelude::*;

use crate::client::{component::Header, router::Route};

/// Shell shared by every route: the navigation header above the active page.
#[component]
pub fn Layout() -> Element {
    rsx!(
        div {
            class: "flex flex-col min-h-screen bg-base-100",
            Header {}
            main {
                class: "flex-1",
                Outlet::<Route> {}
            }
        }
    )
}
