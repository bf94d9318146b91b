use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, Page, ValidationErrorsModal},
        constant::SITE_NAME,
        model::{
            error::Field,
            form::{EntityForm, ProjectDraft},
        },
        router::Route,
        store::AppState,
    },
    model::project::Project,
};

use super::photo_input::PhotoInput;

/// Create form; prefilled when an edit target was selected before navigating here.
#[component]
pub fn CreateProject() -> Element {
    let state = use_context::<Signal<AppState>>();
    let target = state.read().projects.editing().cloned();
    let form_key = target
        .as_ref()
        .and_then(|project| project.id)
        .map_or_else(|| "new".to_string(), |id| id.to_string());

    rsx! {
        Title { "Create Project | {SITE_NAME}" }
        ProjectForm { key: "{form_key}", target }
    }
}

#[component]
pub fn EditProject(id: u64) -> Element {
    let state = use_context::<Signal<AppState>>();
    let target = state.read().projects.edit_target(id).cloned();

    rsx! {
        Title { "Edit Project | {SITE_NAME}" }
        if let Some(project) = target {
            ProjectForm { key: "{id}", target: Some(project) }
        } else {
            ErrorPage { status: 404, message: format!("Project {} does not exist", id) }
        }
    }
}

#[component]
fn ProjectForm(target: Option<Project>) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let mut form = use_signal(|| EntityForm::<ProjectDraft>::new(target.as_ref()));
    let nav = navigator();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if form.write().save_into(&mut state.write().projects).is_ok() {
            nav.push(Route::Portfolio {});
        }
    };

    let on_cancel = move |_| {
        form.write().cancel_from(&mut state.write().projects);
        nav.push(Route::Portfolio {});
    };

    let draft = form.read().draft().clone();
    let errors = form.read().errors().clone();
    let errors_shown = form.read().errors_shown();
    let is_editing = form.read().is_editing();
    let name_error = errors.for_field(Field::Name).copied();
    let price_error = errors.for_field(Field::Price).copied();

    rsx!(
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-2xl card bg-base-200",
                div {
                    class: "card-body",
                    h2 {
                        class: "card-title mb-4",
                        if is_editing { "Edit Project" } else { "Create Project" }
                    }
                    form {
                        class: "flex flex-col gap-4",
                        onsubmit: on_submit,

                        // Name
                        div {
                            class: "form-control w-full flex flex-col gap-2",
                            label {
                                class: "label",
                                span { class: "label-text", "Project Name*" }
                            }
                            input {
                                r#type: "text",
                                class: if name_error.is_some() {
                                    "input input-bordered input-error w-full"
                                } else {
                                    "input input-bordered w-full"
                                },
                                placeholder: "Enter project name",
                                value: "{draft.name}",
                                oninput: move |evt| {
                                    form.write().draft_mut().name = evt.value();
                                }
                            }
                            if let Some(err) = name_error {
                                span { class: "text-error text-sm", "{err}" }
                            }
                        }

                        PhotoInput { form }

                        // Description
                        div {
                            class: "form-control w-full flex flex-col gap-2",
                            label {
                                class: "label",
                                span { class: "label-text", "Project Description" }
                                span { class: "label-text-alt opacity-60", "Markdown supported" }
                            }
                            textarea {
                                class: "textarea textarea-bordered w-full h-32",
                                placeholder: "Describe the project",
                                value: "{draft.description}",
                                oninput: move |evt| {
                                    form.write().draft_mut().description = evt.value();
                                }
                            }
                        }

                        // Price
                        div {
                            class: "form-control w-full flex flex-col gap-2",
                            label {
                                class: "label",
                                span { class: "label-text", "Project Price*" }
                            }
                            input {
                                r#type: "number",
                                min: "0",
                                step: "1",
                                class: if price_error.is_some() {
                                    "input input-bordered input-error w-48"
                                } else {
                                    "input input-bordered w-48"
                                },
                                placeholder: "Amount ($)",
                                value: "{draft.price}",
                                oninput: move |evt| {
                                    form.write().draft_mut().price = evt.value();
                                }
                            }
                            if let Some(err) = price_error {
                                span { class: "text-error text-sm", "{err}" }
                            }
                        }

                        div {
                            class: "modal-action",
                            button {
                                r#type: "button",
                                class: "btn",
                                onclick: on_cancel,
                                "Cancel"
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                "Save"
                            }
                        }
                    }
                }
            }
        }

        ValidationErrorsModal {
            show: errors_shown,
            errors,
            on_close: move |_| form.write().dismiss_errors(),
        }
    )
}
