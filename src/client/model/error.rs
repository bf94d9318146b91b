//! Field validation errors.
//!
//! Every failure is a typed `FieldError` tied to the form field it belongs to, so views
//! decide where to render an error by matching on `Field` and `FieldErrorKind` rather
//! than on message text. `ValidationErrors` keeps the ordered, aggregated list a form
//! shows when a save is rejected.

use std::fmt;

use thiserror::Error;

/// Form field an error is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Price,
    Photo,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Name => "Name",
            Field::Price => "Price",
            Field::Photo => "Photo",
        };
        write!(f, "{}", label)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Field was left empty.
    #[error("is required")]
    RequiredFieldMissing,

    /// Value is longer than the field allows.
    ///
    /// # Fields
    /// - Maximum number of characters
    #[error("must be at most {0} characters long")]
    FieldTooLong(usize),

    /// Value contains something other than letters and whitespace.
    #[error("may only contain letters and spaces")]
    InvalidCharacters,

    /// Value is not a whole non-negative number.
    #[error("must be a whole number")]
    InvalidNumber,

    /// Picked file exceeds the upload limit.
    ///
    /// # Fields
    /// - Maximum size in bytes
    #[error("must not exceed {} MB", .0 / (1024 * 1024))]
    FileTooLarge(u64),

    /// Picked file could not be read by the browser.
    #[error("could not be read, please pick the file again")]
    FileUnreadable,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{field} {kind}")]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: Field, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

/// Ordered list of every field error found by a form-level validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Records the error of a single field check, if any.
    pub fn check(&mut self, result: Result<(), FieldError>) {
        if let Err(error) = result {
            self.push(error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First error reported against `field`, used for inline messages.
    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|error| error.field == field)
    }

    /// Turns an empty list into `Ok`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
