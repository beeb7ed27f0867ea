use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::contact::{Contact as DomainContact, SanitizedContact};
use crate::domain::types::{ContactId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::contact::Contact`].
pub struct Contact {
    pub id: i32,
    pub first: String,
    pub last: String,
    pub email: String,
    pub phone: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::contacts)]
/// Insertable form of [`Contact`]. Timestamps come from column defaults.
pub struct NewContact<'a> {
    pub first: &'a str,
    pub last: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::contacts)]
/// Data used when updating a [`Contact`] record.
pub struct UpdateContact<'a> {
    pub first: &'a str,
    pub last: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Contact> for DomainContact {
    type Error = TypeConstraintError;

    fn try_from(contact: Contact) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ContactId::new(contact.id)?,
            first: contact.first,
            last: contact.last,
            email: contact.email,
            phone: contact.phone,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
            deleted_at: contact.deleted_at,
        })
    }
}

impl<'a> From<&'a SanitizedContact> for NewContact<'a> {
    fn from(contact: &'a SanitizedContact) -> Self {
        Self {
            first: contact.first.as_str(),
            last: contact.last.as_str(),
            email: contact.email.as_str(),
            phone: contact.phone.as_str(),
        }
    }
}

impl<'a> UpdateContact<'a> {
    /// Builds a changeset stamping `updated_at` with the given time.
    pub fn new(contact: &'a SanitizedContact, updated_at: NaiveDateTime) -> Self {
        Self {
            first: contact.first.as_str(),
            last: contact.last.as_str(),
            email: contact.email.as_str(),
            phone: contact.phone.as_str(),
            updated_at,
        }
    }
}
