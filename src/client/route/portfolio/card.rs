use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaPen, FaTrash},
    Icon,
};

use crate::{
    client::{
        component::{ConfirmationModal, Markdown},
        model::confirmation::DeleteConfirmation,
        router::Route,
        store::AppState,
    },
    model::project::Project,
};

#[component]
pub(super) fn PortfolioCard(project: Project) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let mut confirmation = use_signal(DeleteConfirmation::default);
    let nav = navigator();

    let Some(id) = project.id else {
        return rsx! {};
    };
    let project_for_edit = project.clone();
    let project_name = project.name.clone();

    rsx!(
        div {
            class: "card bg-base-200 shadow-sm",
            figure {
                class: "h-48 bg-base-300",
                if let Some(photo) = &project.photo {
                    img {
                        class: "object-cover w-full h-full",
                        src: "{photo.data_url}",
                        alt: "{project.name}",
                    }
                } else {
                    span { class: "opacity-50", "No photo" }
                }
            }
            div {
                class: "card-body",
                h3 {
                    class: "card-title",
                    "{project.name}"
                }
                if project.description.trim().is_empty() {
                    p { class: "opacity-50", "No description" }
                } else {
                    Markdown { source: project.description.clone() }
                }
                div {
                    class: "card-actions items-center justify-between mt-2",
                    span {
                        class: "font-semibold",
                        "{project.price} $"
                    }
                    div {
                        class: "flex gap-2",
                        button {
                            class: "btn btn-sm btn-primary",
                            title: "Edit",
                            onclick: move |_| {
                                state.write().projects.set_editing(Some(project_for_edit.clone()));
                                nav.push(Route::EditProject { id });
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
                }
            }

            ConfirmationModal {
                show: confirmation().is_confirming(),
                title: "Delete Project".to_string(),
                message: rsx!(
                    div {
                        class: "py-4",
                        p {
                            "Are you sure you want to delete the project "
                            span { class: "font-bold", "\"{project_name}\"" }
                            "?"
                        }
                    }
                ),
                confirm_text: "Yes".to_string(),
                confirm_class: "btn-error".to_string(),
                on_cancel: move |_| confirmation.write().cancel(),
                on_confirm: move |_| {
                    confirmation.write().confirm(&mut state.write().projects, id);
                },
            }
        }
    )
}
