use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaPen, FaTrash},
    Icon,
};

use crate::{
    client::{
        component::ConfirmationModal, model::confirmation::DeleteConfirmation, router::Route,
        store::AppState,
    },
    model::service::Service,
};

#[component]
pub(super) fn ServiceRow(service: Service) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let mut confirmation = use_signal(DeleteConfirmation::default);
    let nav = navigator();

    let Some(id) = service.id else {
        return rsx! {};
    };
    let service_for_edit = service.clone();
    let service_name = service.name.clone();
    let price_display = service.price_display();

    rsx!(
        tr {
            td { "{service.name}" }
            td { "{price_display}" }
            td {
                if service.is_active {
                    span { class: "badge badge-success", "Active" }
                } else {
                    span { class: "badge badge-ghost", "Inactive" }
                }
            }
            td {
                div {
                    class: "flex gap-2 justify-end",
                    button {
                        class: "btn btn-sm btn-primary",
                        title: "Edit",
                        onclick: move |_| {
                            state.write().services.set_editing(Some(service_for_edit.clone()));
                            nav.push(Route::EditService { id });
                        },
                        Icon { width: 14, height: 14, icon: FaPen }
                    }
                    button {
                        class: "btn btn-sm btn-error",
                        title: "Delete",
                        onclick: move |_| confirmation.write().request(),
                        Icon { width: 14, height: 14, icon: FaTrash }
                    }
                }

                ConfirmationModal {
                    show: confirmation().is_confirming(),
                    title: "Delete Service".to_string(),
                    message: rsx!(
                        div {
                            class: "py-4",
                            p {
                                "Are you sure you want to delete the service "
                                span { class: "font-bold", "\"{service_name}\"" }
                                "?"
                            }
                        }
                    ),
                    confirm_text: "Yes".to_string(),
                    confirm_class: "btn-error".to_string(),
                    on_cancel: move |_| confirmation.write().cancel(),
                    on_confirm: move |_| {
                        confirmation.write().confirm(&mut state.write().services, id);
                    },
                }
            }
        }
    )
}
