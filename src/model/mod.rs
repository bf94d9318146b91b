//! Entity shapes shared by the stores, forms and views.

pub mod project;
pub mod service;

/// A record kept in an in-memory collection.
///
/// `id` is `None` until the collection assigns one on first save, after which it
/// never changes.
pub trait Entity: Clone {
    fn id(&self) -> Option<u64>;

    fn assign_id(&mut self, id: u64);
}
