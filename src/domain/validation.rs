//! Field rules applied to contact input before it is persisted.
//!
//! Everything here is pure. The uniqueness lookup lives in
//! [`crate::services::validation`] because it needs a repository.

use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use validator::ValidateLength;

pub const MAX_NAME_LENGTH: u64 = 100;
pub const MAX_EMAIL_LENGTH: u64 = 255;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Contact attributes that can fail validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    First,
    Last,
    Email,
    Phone,
}

impl ContactField {
    /// Form field name.
    pub const fn as_str(self) -> &'static str {
        match self {
            ContactField::First => "first",
            ContactField::Last => "last",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
        }
    }

    /// Human-readable label used in error messages.
    pub const fn label(self) -> &'static str {
        match self {
            ContactField::First => "first name",
            ContactField::Last => "last name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
        }
    }

    fn format_message(self) -> String {
        match self {
            ContactField::Phone => "phone must be 10 or 11 digits".to_string(),
            other => format!("invalid {} format", other.label()),
        }
    }
}

impl Display for ContactField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a contact candidate is rejected.
///
/// The `Display` output is shown to end users next to the form.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    RequiredField(ContactField),

    #[error("{} must be at most {} characters", .0.label(), .1)]
    TooLong(ContactField, u64),

    #[error("{}", .0.format_message())]
    InvalidFormat(ContactField),

    #[error("{} already in use", .0.label())]
    DuplicateValue(ContactField),

    #[error("database error checking email uniqueness")]
    StorageUnavailable,
}

impl ValidationError {
    /// Field the error should be attached to, if any.
    pub fn field(&self) -> Option<ContactField> {
        match self {
            ValidationError::RequiredField(field)
            | ValidationError::TooLong(field, _)
            | ValidationError::InvalidFormat(field)
            | ValidationError::DuplicateValue(field) => Some(*field),
            ValidationError::StorageUnavailable => None,
        }
    }
}

/// Trims a name and rejects it when empty or longer than [`MAX_NAME_LENGTH`].
pub fn require_name(value: &str, field: ContactField) -> Result<String, ValidationError> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField(field));
    }
    if !trimmed.validate_length(None, Some(MAX_NAME_LENGTH), None) {
        return Err(ValidationError::TooLong(field, MAX_NAME_LENGTH));
    }
    Ok(trimmed)
}

/// Trims an email and checks its shape. An empty value is accepted as-is.
pub fn check_email_format(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        return Ok(trimmed);
    }
    if !trimmed.validate_length(None, Some(MAX_EMAIL_LENGTH), None) {
        return Err(ValidationError::TooLong(
            ContactField::Email,
            MAX_EMAIL_LENGTH,
        ));
    }
    if !EMAIL_SHAPE.is_match(&trimmed) {
        return Err(ValidationError::InvalidFormat(ContactField::Email));
    }
    Ok(trimmed)
}

/// Strips formatting from a phone number, keeping only the digits.
///
/// An empty (or whitespace-only) value stays empty; anything else must reduce
/// to exactly 10 or 11 digits.
pub fn normalize_phone(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 | 11 => Ok(digits),
        _ => Err(ValidationError::InvalidFormat(ContactField::Phone)),
    }
}
