use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::ContactId;

/// A persisted contact as seen by the rest of the application.
///
/// Reads skip soft-deleted rows, so `deleted_at` is `None` on anything the
/// repository hands out.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    pub first: String,
    pub last: String,
    pub email: String,
    pub phone: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Raw, user-supplied contact values awaiting validation.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDraft {
    pub first: String,
    pub last: String,
    pub email: String,
    pub phone: String,
}

impl ContactDraft {
    #[must_use]
    pub fn new(
        first: impl Into<String>,
        last: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl From<&Contact> for ContactDraft {
    fn from(contact: &Contact) -> Self {
        Self {
            first: contact.first.clone(),
            last: contact.last.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        }
    }
}

/// Contact values that passed validation: trimmed names, checked email and a
/// digits-only phone number. Used for both inserts and updates.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SanitizedContact {
    pub first: String,
    pub last: String,
    pub email: String,
    pub phone: String,
}
