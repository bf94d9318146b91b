use dioxus_logger::tracing;

use crate::{client::store::Collection, model::Entity};

/// Delete state of a single list item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteConfirmation {
    #[default]
    Normal,
    /// Waiting for the user to answer "Yes" or "No"
    Confirming,
}

impl DeleteConfirmation {
    pub fn is_confirming(self) -> bool {
        self == DeleteConfirmation::Confirming
    }

    pub fn request(&mut self) {
        *self = DeleteConfirmation::Confirming;
    }

    pub fn cancel(&mut self) {
        *self = DeleteConfirmation::Normal;
    }

    /// Deletes `id` from `collection` if a delete was requested first.
    ///
    /// # Returns
    /// - `true` - A record was removed
    /// - `false` - No delete was pending, or `id` was not in the collection
    pub fn confirm<T: Entity>(&mut self, collection: &mut Collection<T>, id: u64) -> bool {
        if !self.is_confirming() {
            tracing::debug!("Ignoring delete confirmation for {} without a request", id);
            return false;
        }

        *self = DeleteConfirmation::Normal;
        collection.delete(id)
    }
}
