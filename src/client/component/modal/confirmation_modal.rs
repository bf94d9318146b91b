use dioxus::prelude::*;

use super::Modal;

/// Yes/No dialog; closing it any other way counts as "No".
#[component]
pub fn ConfirmationModal(
    show: bool,
    title: String,
    message: Element,
    confirm_text: String,
    confirm_class: String,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            on_close: on_cancel,
            {message}
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| on_cancel.call(()),
                    "No"
                }
                button {
                    r#type: "button",
                    class: "btn {confirm_class}",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_text}"
                }
            }
        }
    )
}
