pub mod header;
pub mod layout;
pub mod markdown;
pub mod modal;
pub mod page;

pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use modal::{ConfirmationModal, ValidationErrorsModal};
pub use page::{ErrorPage, Page};
