use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, Page, ValidationErrorsModal},
        constant::SITE_NAME,
        model::{
            error::Field,
            form::{EntityForm, ServiceDraft},
        },
        router::Route,
        store::AppState,
    },
    model::service::{PaymentType, Service},
};

/// Create form; prefilled when an edit target was selected before navigating here.
#[component]
pub fn CreateService() -> Element {
    let state = use_context::<Signal<AppState>>();
    let target = state.read().services.editing().cloned();
    let form_key = target
        .as_ref()
        .and_then(|service| service.id)
        .map_or_else(|| "new".to_string(), |id| id.to_string());

    rsx! {
        Title { "Create Service | {SITE_NAME}" }
        ServiceForm { key: "{form_key}", target }
    }
}

#[component]
pub fn EditService(id: u64) -> Element {
    let state = use_context::<Signal<AppState>>();
    let target = state.read().services.edit_target(id).cloned();

    rsx! {
        Title { "Edit Service | {SITE_NAME}" }
        if let Some(service) = target {
            ServiceForm { key: "{id}", target: Some(service) }
        } else {
            ErrorPage { status: 404, message: format!("Service {} does not exist", id) }
        }
    }
}

#[component]
fn ServiceForm(target: Option<Service>) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let mut form = use_signal(|| EntityForm::<ServiceDraft>::new(target.as_ref()));
    let nav = navigator();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if form.write().save_into(&mut state.write().services).is_ok() {
            nav.push(Route::Services {});
        }
    };

    let on_cancel = move |_| {
        form.write().cancel_from(&mut state.write().services);
        nav.push(Route::Services {});
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
                        if is_editing { "Edit Service" } else { "Create Service" }
                    }
                    form {
                        class: "flex flex-col gap-4",
                        onsubmit: on_submit,

                        // Name
                        div {
                            class: "form-control w-full flex flex-col gap-2",
                            label {
                                class: "label",
                                span { class: "label-text", "Service Name*" }
                            }
                            input {
                                r#type: "text",
                                class: if name_error.is_some() {
                                    "input input-bordered input-error w-full"
                                } else {
                                    "input input-bordered w-full"
                                },
                                placeholder: "Enter service name",
                                value: "{draft.name}",
                                oninput: move |evt| {
                                    form.write().draft_mut().name = evt.value();
                                }
                            }
                            if let Some(err) = name_error {
                                span { class: "text-error text-sm", "{err}" }
                            }
                        }

                        // Payment type and amount
                        div {
                            class: "form-control w-full flex flex-col gap-2",
                            label {
                                class: "label",
                                span { class: "label-text", "Payment Type and Amount*" }
                            }
                            for payment_type in PaymentType::ALL {
                                div {
                                    key: "{payment_type.label()}",
                                    class: "flex items-center gap-3",
                                    label {
                                        class: "label cursor-pointer gap-2",
                                        input {
                                            r#type: "radio",
                                            class: "radio radio-sm",
                                            name: "payment_type",
                                            checked: draft.payment_type == payment_type,
                                            onchange: move |_| {
                                                form.write().draft_mut().select_payment_type(payment_type);
                                            }
                                        }
                                        span { class: "label-text", "{payment_type.label()}" }
                                    }
                                    if draft.payment_type == payment_type {
                                        if let Some(unit) = payment_type.price_unit() {
                                            input {
                                                r#type: "number",
                                                min: "0",
                                                step: "1",
                                                class: if price_error.is_some() {
                                                    "input input-bordered input-sm input-error w-40"
                                                } else {
                                                    "input input-bordered input-sm w-40"
                                                },
                                                placeholder: "Amount ({unit})",
                                                value: "{draft.price}",
                                                oninput: move |evt| {
                                                    form.write().draft_mut().price = evt.value();
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            if let Some(err) = price_error {
                                span { class: "text-error text-sm", "{err}" }
                            }
                        }

                        // Active flag
                        div {
                            class: "form-control",
                            label {
                                class: "label cursor-pointer justify-start gap-4",
                                span { class: "label-text", "Active" }
                                input {
                                    r#type: "checkbox",
                                    class: "toggle toggle-primary",
                                    checked: draft.is_active,
                                    onchange: move |_| {
                                        let mut guard = form.write();
                                        let draft = guard.draft_mut();
                                        draft.is_active = !draft.is_active;
                                    }
                                }
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
