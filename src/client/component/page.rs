use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

#[component]
pub fn ErrorPage(status: u16, message: String) -> Element {
    rsx!(
        Page {
            class: "flex flex-col items-center justify-center gap-4 w-full h-full",
            p {
                class: "text-5xl font-bold opacity-50",
                "{status}"
            }
            p {
                class: "text-lg",
                "{message}"
            }
            Link {
                to: Route::Services {},
                class: "btn btn-outline",
                "Back to services"
            }
        }
    )
}
