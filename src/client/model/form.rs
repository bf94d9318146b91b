//! Draft state behind the create/edit forms.
//!
//! A form starts empty or prefilled from the entity being edited, keeps every keystroke
//! in its local draft, and only touches the shared collection once the whole draft
//! validates. Saving and cancelling both clear the collection's editing pointer and
//! reset the draft.

use dioxus_logger::tracing;

use crate::{
    client::{
        model::{
            error::{Field, FieldError, FieldErrorKind, ValidationErrors},
            validation::{validate_name, validate_photo, validate_price},
        },
        store::Collection,
    },
    model::{
        project::{Photo, Project},
        service::{PaymentType, Service},
        Entity,
    },
};

/// Local, unvalidated field values of a form.
pub trait Draft: Default + Clone {
    type Entity: Entity;

    fn from_entity(entity: &Self::Entity) -> Self;

    /// Collects the errors of every field, in display order.
    fn validate(&self) -> ValidationErrors;

    /// Builds the normalized entity; `id` is carried over when editing.
    fn build(&self, id: Option<u64>) -> Self::Entity;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceDraft {
    pub name: String,
    pub payment_type: PaymentType,
    pub price: String,
    pub is_active: bool,
}

impl ServiceDraft {
    /// Switching to agreement drops any amount typed so far.
    pub fn select_payment_type(&mut self, payment_type: PaymentType) {
        self.payment_type = payment_type;
        if !payment_type.requires_price() {
            self.price.clear();
        }
    }
}

impl Draft for ServiceDraft {
    type Entity = Service;

    fn from_entity(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            payment_type: service.payment_type,
            price: service.price.clone().unwrap_or_default(),
            is_active: service.is_active,
        }
    }

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check(validate_name(&self.name));
        if self.payment_type.requires_price() {
            errors.check(validate_price(&self.price));
        }
        errors
    }

    fn build(&self, id: Option<u64>) -> Service {
        Service {
            id,
            name: self.name.clone(),
            payment_type: self.payment_type,
            price: self
                .payment_type
                .requires_price()
                .then(|| self.price.clone()),
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub photo: Option<Photo>,
    /// Problem with the last picked file; blocks saving until replaced or removed
    pub photo_error: Option<FieldError>,
    pub description: String,
    pub price: String,
    /// Bumped on every pick or removal; reads started for older picks are dropped
    photo_selection: u64,
}

impl ProjectDraft {
    /// Starts a new photo pick, checking the file's size before it is read.
    ///
    /// Any read still running for an earlier pick becomes stale.
    ///
    /// # Returns
    /// - `Some(u64)` - Selection the finished read must report back with
    /// - `None` - File is too large, the error is kept on the draft
    pub fn select_photo(&mut self, size_bytes: u64) -> Option<u64> {
        self.photo_selection += 1;
        match validate_photo(size_bytes) {
            Ok(()) => Some(self.photo_selection),
            Err(error) => {
                self.photo_error = Some(error);
                None
            }
        }
    }

    /// Attaches the photo read for `selection`.
    ///
    /// # Returns
    /// - `true` - Photo attached
    /// - `false` - A newer pick or a removal superseded this read
    pub fn attach_photo(&mut self, selection: u64, photo: Photo) -> bool {
        if !self.is_current_selection(selection) {
            return false;
        }
        self.photo = Some(photo);
        self.photo_error = None;
        true
    }

    /// Records that the file picked for `selection` could not be read.
    pub fn photo_unreadable(&mut self, selection: u64) -> bool {
        if !self.is_current_selection(selection) {
            return false;
        }
        self.photo_error = Some(FieldError::new(Field::Photo, FieldErrorKind::FileUnreadable));
        true
    }

    pub fn remove_photo(&mut self) {
        self.photo_selection += 1;
        self.photo = None;
        self.photo_error = None;
    }

    fn is_current_selection(&self, selection: u64) -> bool {
        if selection != self.photo_selection {
            tracing::debug!(
                "Dropping stale photo read {} (current {})",
                selection,
                self.photo_selection
            );
            return false;
        }
        true
    }
}

impl Draft for ProjectDraft {
    type Entity = Project;

    fn from_entity(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            photo: project.photo.clone(),
            photo_error: None,
            description: project.description.clone(),
            price: project.price.clone(),
            photo_selection: 0,
        }
    }

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.check(validate_name(&self.name));
        errors.check(validate_price(&self.price));
        if let Some(error) = self.photo_error {
            errors.push(error);
        }
        errors
    }

    fn build(&self, id: Option<u64>) -> Project {
        Project {
            id,
            name: self.name.clone(),
            photo: self.photo.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Creating, fields start blank
    Empty,
    /// Editing, fields hydrated from the target
    Prefilled,
    /// Last save attempt failed validation
    ErrorsShown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityForm<D> {
    draft: D,
    target_id: Option<u64>,
    errors: ValidationErrors,
    phase: FormPhase,
}

impl<D: Draft> EntityForm<D> {
    pub fn new(target: Option<&D::Entity>) -> Self {
        match target {
            Some(entity) => Self {
                draft: D::from_entity(entity),
                target_id: entity.id(),
                errors: ValidationErrors::new(),
                phase: FormPhase::Prefilled,
            },
            None => Self {
                draft: D::default(),
                target_id: None,
                errors: ValidationErrors::new(),
                phase: FormPhase::Empty,
            },
        }
    }

    pub fn is_editing(&self) -> bool {
        self.target_id.is_some()
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    /// Errors of the last rejected save, kept for inline display.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors_shown(&self) -> bool {
        self.phase() == FormPhase::ErrorsShown
    }

    /// Validates the draft and builds the entity to save.
    ///
    /// On failure the draft is kept and the form moves to `ErrorsShown`.
    pub fn submit(&mut self) -> Result<D::Entity, ValidationErrors> {
        if let Err(errors) = self.draft.validate().into_result() {
            tracing::debug!("Save rejected: {}", errors);
            self.errors = errors.clone();
            self.phase = FormPhase::ErrorsShown;
            return Err(errors);
        }

        self.errors = ValidationErrors::new();
        Ok(self.draft.build(self.target_id))
    }

    /// Saves a valid draft into `collection`, then clears its editing pointer and
    /// resets the form.
    ///
    /// # Returns
    /// - `Ok(u64)` - Id of the stored record
    /// - `Err(ValidationErrors)` - Draft is invalid, `collection` is untouched
    pub fn save_into(
        &mut self,
        collection: &mut Collection<D::Entity>,
    ) -> Result<u64, ValidationErrors> {
        let entity = self.submit()?;
        let id = collection.save(entity);
        collection.set_editing(None);
        self.reset();
        Ok(id)
    }

    /// Abandons the draft and clears the editing pointer of `collection`.
    pub fn cancel_from(&mut self, collection: &mut Collection<D::Entity>) {
        collection.set_editing(None);
        self.reset();
    }

    /// Closes the error list; the draft and inline errors stay as they are.
    pub fn dismiss_errors(&mut self) {
        if self.phase == FormPhase::ErrorsShown {
            self.phase = if self.is_editing() {
                FormPhase::Prefilled
            } else {
                FormPhase::Empty
            };
        }
    }

    fn reset(&mut self) {
        *self = Self::new(None);
    }
}
