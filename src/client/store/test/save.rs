use super::*;

/// Tests saving an entity without an id.
///
/// Verifies that the collection assigns a fresh id and appends the record.
///
/// Expected: Ok with one record carrying the returned id
#[test]
fn appends_new_entity_with_fresh_id() {
    let mut services = Collection::default();

    let id = services.save(new_service("Consulting"));

    assert_eq!(services.len(), 1);
    assert_eq!(services.items()[0].id, Some(id));
    assert_eq!(services.items()[0].name, "Consulting");
}

/// Tests that creates append after existing records.
///
/// Verifies that existing records keep their ids and order when a new record is added.
///
/// Expected: Ok with new record last and distinct id
#[test]
fn appends_after_existing_records_in_order() {
    let mut services = seeded_services(&["Design", "Copywriting"]);
    let existing: Vec<_> = services.items().to_vec();

    let id = services.save(new_service("Translation"));

    assert_eq!(names(&services), vec!["Design", "Copywriting", "Translation"]);
    assert_eq!(&services.items()[..2], existing.as_slice());
    assert!(existing.iter().all(|s| s.id != Some(id)));
}

/// Tests saving an entity whose id matches an existing record.
///
/// Verifies that the record is replaced in place without changing its position or id
/// and without adding a record.
///
/// Expected: Ok with same length, same position, updated fields
#[test]
fn replaces_existing_record_in_place() {
    let mut services = seeded_services(&["Design", "Copywriting", "Translation"]);
    let mut updated = services.items()[1].clone();
    updated.name = "Editing".to_string();
    updated.payment_type = PaymentType::Hourly;
    updated.price = Some("40".to_string());
    let id = updated.id.unwrap();

    let saved_id = services.save(updated.clone());

    assert_eq!(saved_id, id);
    assert_eq!(services.len(), 3);
    assert_eq!(services.items()[1], updated);
    assert_eq!(names(&services), vec!["Design", "Editing", "Translation"]);
}

/// Tests saving an entity whose id is no longer in the collection.
///
/// Verifies that the stale id is not reused and the entity is appended as new.
///
/// Expected: Ok with a fresh id different from the stale one
#[test]
fn saves_unknown_id_as_new_record() {
    let mut services = seeded_services(&["Design"]);
    let mut stale = services.items()[0].clone();
    let stale_id = stale.id.unwrap();
    services.delete(stale_id);
    stale.name = "Design again".to_string();

    let id = services.save(stale);

    assert_ne!(id, stale_id);
    assert_eq!(services.len(), 1);
    assert_eq!(services.get(id).map(|s| s.name.as_str()), Some("Design again"));
}

/// Tests that ids are never reused after deletes.
///
/// Expected: Ok with every assigned id unique
#[test]
fn never_reuses_ids_after_delete() {
    let mut services = Collection::default();
    let first = services.save(new_service("One"));
    services.delete(first);

    let second = services.save(new_service("Two"));
    let third = services.save(new_service("Three"));

    assert_ne!(first, second);
    assert_ne!(second, third);
    assert_ne!(first, third);
}

/// Tests that the two collections of the application state are independent.
///
/// Expected: Ok with each collection holding only its own records
#[test]
fn service_and_project_collections_are_independent() {
    let mut state = AppState::default();

    state.services.save(new_service("Design"));
    state.projects.save(new_project("Website"));
    state.projects.save(new_project("Shop"));

    assert_eq!(state.services.len(), 1);
    assert_eq!(state.projects.len(), 2);
}
