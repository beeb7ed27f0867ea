//! Demo data generation for local development and load testing.

use crate::domain::contact::SanitizedContact;
use crate::repository::ContactWriter;
use crate::services::{ServiceError, ServiceResult};

pub const DEFAULT_SEED_COUNT: usize = 8192;

/// Builds the `n`-th generated contact (1-based).
pub fn generated_contact(n: usize) -> SanitizedContact {
    SanitizedContact {
        first: format!("FirstName{n}"),
        last: format!("LastName{n}"),
        email: format!("user{n}@example.com"),
        phone: format!("555{n:07}"),
    }
}

/// Replaces every contact with `count` generated ones, ids starting at 1.
pub fn seed_contacts<R>(repo: &R, count: usize) -> ServiceResult<usize>
where
    R: ContactWriter + ?Sized,
{
    let removed = repo.purge_contacts().map_err(|err| {
        log::error!("Failed to purge contacts: {err}");
        ServiceError::from(err)
    })?;
    log::info!("Removed {removed} existing contacts");

    let contacts: Vec<SanitizedContact> = (1..=count).map(generated_contact).collect();

    repo.create_contacts(&contacts).map_err(|err| {
        log::error!("Failed to insert seed contacts: {err}");
        ServiceError::from(err)
    })
}
