mod card;
mod form;
mod photo_input;

use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaPlus, Icon};

use crate::client::{
    component::Page, constant::SITE_NAME, router::Route, store::AppState,
};

use card::PortfolioCard;

pub use form::{CreateProject, EditProject};

#[component]
pub fn Portfolio() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let nav = navigator();

    let projects = state.read().projects.items().to_vec();

    rsx! {
        Title { "My Projects | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                div {
                    class: "flex justify-between items-center mb-6",
                    h2 {
                        class: "text-2xl font-semibold",
                        "My Projects"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            state.write().projects.set_editing(None);
                            nav.push(Route::CreateProject {});
                        },
                        Icon { width: 14, height: 14, icon: FaPlus }
                        "Add project"
                    }
                }

                if projects.is_empty() {
                    div {
                        class: "flex flex-col items-center gap-2 py-16",
                        span {
                            class: "opacity-50",
                            "Your portfolio is empty. Add a project to show off your work."
                        }
                        button {
                            class: "btn btn-link",
                            onclick: move |_| {
                                state.write().projects.set_editing(None);
                                nav.push(Route::CreateProject {});
                            },
                            "Create a project"
                        }
                    }
                } else {
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for project in projects {
                            {
                                let project_id = project.id.unwrap_or_default();
                                rsx! {
                                    PortfolioCard { key: "{project_id}", project }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
