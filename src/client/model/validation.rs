//! Field rules shared by the service and project forms.
//!
//! A `FieldRule` describes one required text field: how long it may be and which
//! pattern it must match. Checks run in a fixed order (presence, length, pattern) and
//! stop at the first failure, so each field reports at most one error while a form
//! collects the errors of all its fields.

use std::sync::LazyLock;

use regex::Regex;

use crate::client::{
    constant::{MAX_NAME_LENGTH, MAX_PHOTO_BYTES},
    model::error::{Field, FieldError, FieldErrorKind},
};

/// Latin and Cyrillic letters plus whitespace
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\x{0400}-\x{04FF}\s]+$").unwrap());

/// ASCII digits only
static PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

pub struct FieldRule {
    pub field: Field,
    /// Maximum length in characters
    pub max_length: Option<usize>,
    pub pattern: Option<&'static LazyLock<Regex>>,
    /// Error reported when the value does not match `pattern`
    pub mismatch: FieldErrorKind,
}

pub static NAME_RULE: FieldRule = FieldRule {
    field: Field::Name,
    max_length: Some(MAX_NAME_LENGTH),
    pattern: Some(&NAME_PATTERN),
    mismatch: FieldErrorKind::InvalidCharacters,
};

pub static PRICE_RULE: FieldRule = FieldRule {
    field: Field::Price,
    max_length: None,
    pattern: Some(&PRICE_PATTERN),
    mismatch: FieldErrorKind::InvalidNumber,
};

impl FieldRule {
    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        let fail = |kind| Err(FieldError::new(self.field, kind));

        if value.is_empty() {
            return fail(FieldErrorKind::RequiredFieldMissing);
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return fail(FieldErrorKind::FieldTooLong(max));
            }
        }

        if let Some(pattern) = self.pattern {
            if !pattern.is_match(value) {
                return fail(self.mismatch);
            }
        }

        Ok(())
    }
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    NAME_RULE.check(value)
}

pub fn validate_price(value: &str) -> Result<(), FieldError> {
    PRICE_RULE.check(value)
}

/// Checks the size of a picked photo before its bytes are read.
pub fn validate_photo(size_bytes: u64) -> Result<(), FieldError> {
    if size_bytes > MAX_PHOTO_BYTES {
        return Err(FieldError::new(
            Field::Photo,
            FieldErrorKind::FileTooLarge(MAX_PHOTO_BYTES),
        ));
    }

    Ok(())
}
