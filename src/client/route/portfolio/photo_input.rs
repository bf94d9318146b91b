use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        constant::PHOTO_ACCEPT,
        model::form::{EntityForm, ProjectDraft},
    },
    model::project::Photo,
};

/// File picker that embeds the chosen image into the draft as a data URL.
///
/// The size limit is checked before any bytes are read; a failed read is logged and
/// shown as a photo error instead of leaving the field silently unset. Only the read
/// for the latest pick lands in the draft.
#[component]
pub(super) fn PhotoInput(mut form: Signal<EntityForm<ProjectDraft>>) -> Element {
    let on_change = move |evt: Event<FormData>| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };

        let Some(selection) = form.write().draft_mut().select_photo(file.size()) else {
            tracing::debug!("Rejected photo {} of {} bytes", file.name(), file.size());
            return;
        };

        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => {
                    let content_type = file.content_type();
                    let photo = Photo::from_bytes(file.name(), content_type.as_deref(), &bytes);
                    form.write().draft_mut().attach_photo(selection, photo);
                }
                Err(err) => {
                    tracing::warn!("Failed to read photo {}: {}", file.name(), err);
                    form.write().draft_mut().photo_unreadable(selection);
                }
            }
        });
    };

    let photo = form.read().draft().photo.clone();
    let photo_error = form.read().draft().photo_error;

    rsx!(
        div {
            class: "form-control w-full flex flex-col gap-2",
            label {
                class: "label",
                span { class: "label-text", "Project Photo" }
            }
            input {
                r#type: "file",
                accept: PHOTO_ACCEPT,
                class: if photo_error.is_some() {
                    "file-input file-input-bordered file-input-error w-full"
                } else {
                    "file-input file-input-bordered w-full"
                },
                onchange: on_change,
            }
            if let Some(err) = photo_error {
                span { class: "text-error text-sm", "{err}" }
            }
            if let Some(photo) = photo {
                div {
                    class: "flex items-end gap-4",
                    img {
                        class: "max-h-40 rounded-box",
                        src: "{photo.data_url}",
                        alt: "Preview of {photo.file_name}",
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-sm btn-ghost",
                        onclick: move |_| form.write().draft_mut().remove_photo(),
                        "Remove photo"
                    }
                }
            }
        }
    )
}
