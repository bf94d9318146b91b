use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route, store::AppState};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    // Collections live for the whole session and reset on reload
    use_context_provider(|| Signal::new(AppState::default()));

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Manage the services you offer and your project portfolio"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
