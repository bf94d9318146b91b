pub mod not_found;
pub mod portfolio;
pub mod services;

pub use not_found::NotFound;
pub use portfolio::{CreateProject, EditProject, Portfolio};
pub use services::{CreateService, EditService, Services};
