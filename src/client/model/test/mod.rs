use crate::{
    client::{
        constant::{MAX_NAME_LENGTH, MAX_PHOTO_BYTES},
        model::{
            confirmation::DeleteConfirmation,
            error::{Field, FieldError, FieldErrorKind},
            form::{Draft, EntityForm, FormPhase, ProjectDraft, ServiceDraft},
            validation::{validate_name, validate_photo, validate_price},
        },
        store::Collection,
    },
    model::{
        project::{Photo, Project},
        service::{PaymentType, Service},
    },
};

mod service_form;

/// Helper function to build the error a field check is expected to return
fn error(field: Field, kind: FieldErrorKind) -> Result<(), FieldError> {
    Err(FieldError::new(field, kind))
}

/// Helper function to fill a service form with valid values
fn fill_service(
    form: &mut EntityForm<ServiceDraft>,
    name: &str,
    payment_type: PaymentType,
    price: &str,
) {
    let draft = form.draft_mut();
    draft.name = name.to_string();
    draft.select_payment_type(payment_type);
    draft.price = price.to_string();
}

/// Helper function to create a collection with one saved project
fn seeded_projects() -> Collection<Project> {
    let mut projects = Collection::default();
    projects.save(Project {
        id: None,
        name: "Landing page".to_string(),
        photo: None,
        description: "One-page site".to_string(),
        price: "300".to_string(),
    });
    projects
}
