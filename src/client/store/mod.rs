//! Application state shared by every route.
//!
//! `App` provides one `Signal<AppState>` as context; list views read from it and
//! forms write back through the collection operations.

pub mod collection;

pub use collection::Collection;

use crate::model::{project::Project, service::Service};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub services: Collection<Service>,
    pub projects: Collection<Project>,
}

#[cfg(test)]
mod test;
