use dioxus::prelude::*;

use crate::client::model::error::ValidationErrors;

use super::Modal;

/// Lists every error of a rejected save.
#[component]
pub fn ValidationErrorsModal(
    show: bool,
    errors: ValidationErrors,
    on_close: EventHandler<()>,
) -> Element {
    let title = if errors.len() == 1 {
        "Please fix the following field".to_string()
    } else {
        format!("Please fix the following {} fields", errors.len())
    };

    rsx!(
        Modal {
            show,
            title,
            on_close,
            ul {
                class: "list-disc pl-6 space-y-1",
                for (index, error) in errors.iter().enumerate() {
                    li {
                        key: "{index}",
                        class: "text-error",
                        "{error}"
                    }
                }
            }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    )
}
