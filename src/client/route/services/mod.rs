mod form;
mod row;

use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaPlus, Icon};

use crate::client::{
    component::Page, constant::SITE_NAME, router::Route, store::AppState,
};

use row::ServiceRow;

pub use form::{CreateService, EditService};

#[component]
pub fn Services() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let nav = navigator();

    let services = state.read().services.items().to_vec();

    rsx! {
        Title { "Services | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl card bg-base-200",
                div {
                    class: "card-body",
                    div {
                        class: "flex justify-between items-center mb-4",
                        h2 {
                            class: "card-title",
                            "Services"
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                // A fresh create form, never a leftover edit target
                                state.write().services.set_editing(None);
                                nav.push(Route::CreateService {});
                            },
                            Icon { width: 14, height: 14, icon: FaPlus }
                            "Add service"
                        }
                    }

                    if services.is_empty() {
                        div {
                            class: "flex flex-col items-center gap-2 py-8",
                            span {
                                class: "opacity-50",
                                "No services yet. Add the first one to start building your offer."
                            }
                            button {
                                class: "btn btn-link",
                                onclick: move |_| {
                                    state.write().services.set_editing(None);
                                    nav.push(Route::CreateService {});
                                },
                                "Create a service"
                            }
                        }
                    } else {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Payment" }
                                        th { "Status" }
                                        th {
                                            class: "text-right",
                                            "Actions"
                                        }
                                    }
                                }
                                tbody {
                                    for service in services {
                                        {
                                            let service_id = service.id.unwrap_or_default();
                                            rsx! {
                                                ServiceRow { key: "{service_id}", service }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
