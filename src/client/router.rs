use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{
    CreateProject, CreateService, EditProject, EditService, NotFound, Portfolio, Services,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Services {})]

    #[layout(Layout)]
    #[route("/services")]
    Services {},

    #[route("/create-services")]
    CreateService {},

    #[route("/edit-service/:id")]
    EditService { id: u64 },

    #[route("/portfolio")]
    Portfolio {},

    #[route("/create-project")]
    CreateProject {},

    #[route("/edit-project/:id")]
    EditProject { id: u64 },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
