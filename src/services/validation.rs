//! Contact validation, including the email uniqueness lookup.

use crate::domain::contact::{ContactDraft, SanitizedContact};
use crate::domain::types::ContactId;
use crate::domain::validation::{
    ContactField, ValidationError, check_email_format, normalize_phone, require_name,
};
use crate::repository::ContactReader;

/// Checks an email's shape and that no other live contact uses it.
///
/// `existing` is the contact being edited, which may keep its own address.
/// Returns the trimmed email. Blank emails skip the lookup.
pub fn check_email<R>(
    repo: &R,
    email: &str,
    existing: Option<ContactId>,
) -> Result<String, ValidationError>
where
    R: ContactReader + ?Sized,
{
    let email = check_email_format(email)?;
    if email.is_empty() {
        return Ok(email);
    }

    match repo.find_contact_by_email(&email, existing) {
        Ok(None) => Ok(email),
        Ok(Some(_)) => Err(ValidationError::DuplicateValue(ContactField::Email)),
        Err(err) => {
            log::error!("Failed to check email uniqueness: {err}");
            Err(ValidationError::StorageUnavailable)
        }
    }
}

/// Sanitizes and validates a contact candidate without persisting it.
///
/// Checks run in order (names, email, phone) and stop at the first failure.
pub fn validate_contact<R>(
    repo: &R,
    draft: &ContactDraft,
    existing: Option<ContactId>,
) -> Result<SanitizedContact, ValidationError>
where
    R: ContactReader + ?Sized,
{
    let first = require_name(&draft.first, ContactField::First)?;
    let last = require_name(&draft.last, ContactField::Last)?;
    let email = check_email(repo, &draft.email, existing)?;
    let phone = normalize_phone(&draft.phone)?;

    Ok(SanitizedContact {
        first,
        last,
        email,
        phone,
    })
}
