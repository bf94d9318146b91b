//! In-memory, insertion-ordered entity collection.
//!
//! Each collection owns its id counter and the single "currently editing" pointer for
//! its entity kind. Mutations are synchronous; views re-render because the collection
//! lives inside the `Signal<AppState>` they read from.

use dioxus_logger::tracing;

use crate::model::Entity;

#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    /// Next id to hand out; ids are never reused within a session
    next_id: u64,
    editing: Option<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            editing: None,
        }
    }
}

impl<T: Entity> Collection<T> {
    /// Stores `entity`, replacing the record with the same id in place or appending
    /// it under a freshly assigned id.
    ///
    /// An id that matches no record (e.g. the record was deleted while being edited)
    /// is treated like a new entity and gets a fresh id.
    ///
    /// # Returns
    /// - `u64` - Id of the stored record
    pub fn save(&mut self, mut entity: T) -> u64 {
        if let Some(id) = entity.id() {
            if let Some(existing) = self.items.iter_mut().find(|item| item.id() == Some(id)) {
                *existing = entity;
                tracing::info!("Updated record {}", id);
                return id;
            }
            tracing::debug!("Record {} no longer exists, saving as new", id);
        }

        let id = self.next_id;
        self.next_id += 1;
        entity.assign_id(id);
        self.items.push(entity);
        tracing::info!("Created record {}", id);
        id
    }

    /// Removes the record with `id`; absent ids are ignored.
    ///
    /// An editing pointer holding the removed record is cleared with it.
    ///
    /// # Returns
    /// - `true` - A record was removed
    /// - `false` - No record had that id
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != Some(id));

        let removed = self.items.len() != before;
        if removed {
            if self.editing.as_ref().and_then(|entity| entity.id()) == Some(id) {
                self.editing = None;
            }
            tracing::info!("Deleted record {}", id);
        } else {
            tracing::debug!("Delete of unknown record {} ignored", id);
        }
        removed
    }

    /// Sets or clears the record being edited.
    pub fn set_editing(&mut self, entity: Option<T>) {
        match entity.as_ref().and_then(|entity| entity.id()) {
            Some(id) => tracing::debug!("Editing record {}", id),
            None => tracing::debug!("Editing pointer cleared"),
        }
        self.editing = entity;
    }

    pub fn editing(&self) -> Option<&T> {
        self.editing.as_ref()
    }

    /// Resolves the edit target for `id`: the editing pointer when it matches,
    /// otherwise the stored record.
    pub fn edit_target(&self, id: u64) -> Option<&T> {
        self.editing
            .as_ref()
            .filter(|entity| entity.id() == Some(id))
            .or_else(|| self.get(id))
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == Some(id))
    }

    /// Records in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
