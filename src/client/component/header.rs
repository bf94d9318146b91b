use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBriefcase, FaListUl},
    Icon,
};

use crate::client::{constant::SITE_NAME, router::Route, store::AppState};

#[component]
pub fn Header() -> Element {
    let state = use_context::<Signal<AppState>>();

    let service_count = state.read().services.len();
    let project_count = state.read().projects.len();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Services {},
                p {
                    class: "md:text-xl text-wrap font-semibold",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            Link {
                to: Route::Services {},
                class: "btn btn-outline flex gap-2 items-center",
                Icon {
                    width: 18,
                    height: 18,
                    icon: FaListUl
                }
                p { "Services" }
                span { class: "badge badge-sm", "{service_count}" }
            }
            Link {
                to: Route::Portfolio {},
                class: "btn btn-outline flex gap-2 items-center",
                Icon {
                    width: 18,
                    height: 18,
                    icon: FaBriefcase
                }
                p { "My projects" }
                span { class: "badge badge-sm", "{project_count}" }
            }
        }
    })
}
