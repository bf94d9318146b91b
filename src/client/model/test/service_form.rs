use super::*;

/// Tests opening the form without an editing target.
///
/// Expected: Ok with blank draft in the Empty phase
#[test]
fn starts_empty_without_target() {
    let form = EntityForm::<ServiceDraft>::new(None);

    assert_eq!(form.phase(), FormPhase::Empty);
    assert!(!form.is_editing());
    assert_eq!(form.draft(), &ServiceDraft::default());
    assert_eq!(form.draft().payment_type, PaymentType::Agreement);
}

/// Tests opening the form with an editing target.
///
/// Verifies that every field is hydrated from the target, a null price as empty text.
///
/// Expected: Ok with prefilled draft
#[test]
fn hydrates_every_field_from_target() {
    let target = Service {
        id: Some(7),
        name: "Audit".to_string(),
        payment_type: PaymentType::Volume,
        price: Some("900".to_string()),
        is_active: true,
    };

    let form = EntityForm::<ServiceDraft>::new(Some(&target));

    assert_eq!(form.phase(), FormPhase::Prefilled);
    assert!(form.is_editing());
    assert_eq!(
        form.draft(),
        &ServiceDraft {
            name: "Audit".to_string(),
            payment_type: PaymentType::Volume,
            price: "900".to_string(),
            is_active: true,
        }
    );
}

/// Tests that agreement services are saved with a null price.
///
/// Verifies that a price typed while another payment type was selected is dropped.
///
/// Expected: Ok with price None
#[test]
fn agreement_saves_null_price() {
    let mut form = EntityForm::<ServiceDraft>::new(None);
    fill_service(&mut form, "Consulting", PaymentType::Hourly, "50");
    form.draft_mut().select_payment_type(PaymentType::Agreement);

    let service = form.submit().unwrap();

    assert_eq!(service.price, None);
    assert_eq!(service.id, None);
}

/// Tests that a stale price on an agreement draft is still not saved.
///
/// Expected: Ok with price None even when the draft holds text
#[test]
fn agreement_ignores_price_left_in_draft() {
    let draft = ServiceDraft {
        name: "Consulting".to_string(),
        payment_type: PaymentType::Agreement,
        price: "50".to_string(),
        is_active: false,
    };

    assert_eq!(draft.validate().len(), 0);
    assert_eq!(draft.build(None).price, None);
}

/// Tests saving hourly and volume services without a price.
///
/// Verifies that the save is rejected and the collection is unchanged.
///
/// Expected: Err with RequiredFieldMissing on Price
#[test]
fn priced_types_require_price() {
    for payment_type in [PaymentType::Hourly, PaymentType::Volume] {
        let mut services = Collection::default();
        let mut form = EntityForm::<ServiceDraft>::new(None);
        fill_service(&mut form, "Consulting", payment_type, "");

        let errors = form.save_into(&mut services).unwrap_err();

        assert_eq!(
            errors.for_field(Field::Price).map(|e| e.kind),
            Some(FieldErrorKind::RequiredFieldMissing)
        );
        assert!(services.is_empty());
        assert_eq!(form.phase(), FormPhase::ErrorsShown);
    }
}

/// Tests that every invalid field is reported at once.
///
/// Expected: Err with name error before price error
#[test]
fn collects_errors_of_all_fields() {
    let mut form = EntityForm::<ServiceDraft>::new(None);
    fill_service(&mut form, "Design 2", PaymentType::Hourly, "fifty");

    let errors = form.submit().unwrap_err();

    let fields: Vec<_> = errors.iter().map(|e| (e.field, e.kind)).collect();
    assert_eq!(
        fields,
        vec![
            (Field::Name, FieldErrorKind::InvalidCharacters),
            (Field::Price, FieldErrorKind::InvalidNumber),
        ]
    );
}

/// Tests that a rejected save keeps the draft.
///
/// Expected: Ok with draft unchanged and errors kept for inline display
#[test]
fn rejected_save_retains_draft() {
    let mut services = Collection::default();
    let mut form = EntityForm::<ServiceDraft>::new(None);
    fill_service(&mut form, "", PaymentType::Volume, "100");
    let draft = form.draft().clone();

    assert!(form.save_into(&mut services).is_err());

    assert_eq!(form.draft(), &draft);
    assert!(form.errors().for_field(Field::Name).is_some());
}

/// Tests dismissing the error list.
///
/// Verifies that the form returns to field editing without touching the draft,
/// and keeps the inline errors until the next save attempt.
///
/// Expected: Ok with phase back to Empty
#[test]
fn dismissing_errors_returns_to_editing() {
    let mut form = EntityForm::<ServiceDraft>::new(None);
    assert!(form.submit().is_err());
    let draft = form.draft().clone();

    form.dismiss_errors();

    assert_eq!(form.phase(), FormPhase::Empty);
    assert!(!form.errors_shown());
    assert_eq!(form.draft(), &draft);
    assert!(form.errors().for_field(Field::Name).is_some());
}

/// Tests a successful create.
///
/// Verifies that the record is appended, the editing pointer is cleared and the
/// draft is reset.
///
/// Expected: Ok with the new id
#[test]
fn save_creates_record_and_resets_form() {
    let mut services = Collection::default();
    let mut form = EntityForm::<ServiceDraft>::new(None);
    fill_service(&mut form, "Copywriting", PaymentType::Volume, "120");
    form.draft_mut().is_active = true;

    let id = form.save_into(&mut services).unwrap();

    assert_eq!(
        services.items(),
        &[Service {
            id: Some(id),
            name: "Copywriting".to_string(),
            payment_type: PaymentType::Volume,
            price: Some("120".to_string()),
            is_active: true,
        }]
    );
    assert!(services.editing().is_none());
    assert_eq!(form, EntityForm::new(None));
}

/// Tests a successful edit.
///
/// Verifies that the target keeps its id and position and no record is added.
///
/// Expected: Ok with the target's id
#[test]
fn save_updates_target_in_place() {
    let mut services = Collection::default();
    services.save(Service {
        id: None,
        name: "First".to_string(),
        payment_type: PaymentType::Agreement,
        price: None,
        is_active: false,
    });
    let target_id = services.save(Service {
        id: None,
        name: "Second".to_string(),
        payment_type: PaymentType::Agreement,
        price: None,
        is_active: false,
    });
    let target = services.get(target_id).cloned();
    services.set_editing(target.clone());

    let mut form = EntityForm::<ServiceDraft>::new(target.as_ref());
    form.draft_mut().name = "Second edited".to_string();
    let id = form.save_into(&mut services).unwrap();

    assert_eq!(id, target_id);
    assert_eq!(services.len(), 2);
    assert_eq!(services.items()[1].name, "Second edited");
    assert_eq!(services.items()[1].id, Some(target_id));
    assert!(services.editing().is_none());
}

/// Tests cancelling the form.
///
/// Expected: Ok with collection untouched, pointer cleared and draft reset
#[test]
fn cancel_clears_pointer_and_leaves_collection() {
    let mut services = Collection::default();
    let id = services.save(Service {
        id: None,
        name: "Audit".to_string(),
        payment_type: PaymentType::Agreement,
        price: None,
        is_active: false,
    });
    let target = services.get(id).cloned();
    services.set_editing(target.clone());
    let before = services.items().to_vec();

    let mut form = EntityForm::<ServiceDraft>::new(target.as_ref());
    form.draft_mut().name = "Something else".to_string();
    form.cancel_from(&mut services);

    assert_eq!(services.items(), before.as_slice());
    assert!(services.editing().is_none());
    assert_eq!(form.phase(), FormPhase::Empty);
    assert!(form.draft().name.is_empty());
}
