use crate::domain::contact::{Contact, ContactDraft};
use crate::domain::types::ContactId;
use crate::domain::validation::ValidationError;
pub use crate::dto::contacts::IndexQuery;
use crate::dto::contacts::IndexPageData;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, PageWindow, Paginated, parse_page};
use crate::repository::{ContactListQuery, ContactReader, ContactWriter};
use crate::services::validation::{check_email, validate_contact};
use crate::services::{ServiceError, ServiceResult};

fn parse_contact_id(raw: i32) -> ServiceResult<ContactId> {
    ContactId::new(raw).map_err(|_| ServiceError::NotFound)
}

/// Filters live contacts by `term` and returns the requested page, clamped to
/// the last page that has rows.
pub fn paginate_contacts<R>(
    repo: &R,
    term: Option<&str>,
    requested_page: usize,
    per_page: usize,
) -> ServiceResult<Paginated<Contact>>
where
    R: ContactReader + ?Sized,
{
    let mut query = ContactListQuery::new();
    if let Some(term) = term {
        query = query.search(term);
    }

    let total = repo.count_contacts(&query).map_err(|err| {
        log::error!("Failed to count contacts: {err}");
        ServiceError::from(err)
    })?;

    let window = PageWindow::resolve(requested_page, total, per_page);

    let items = if total == 0 {
        Vec::new()
    } else {
        repo.list_contacts(&query.paginate(window.page, window.per_page))
            .map_err(|err| {
                log::error!("Failed to list contacts: {err}");
                ServiceError::from(err)
            })?
    };

    Ok(Paginated::new(items, &window))
}

/// Loads the contacts listing for the index page.
pub fn load_index_page<R>(repo: &R, query: IndexQuery) -> ServiceResult<IndexPageData>
where
    R: ContactReader + ?Sized,
{
    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let page = parse_page(query.page.as_deref());

    let contacts = paginate_contacts(
        repo,
        search_query.as_deref(),
        page,
        DEFAULT_ITEMS_PER_PAGE,
    )?;

    Ok(IndexPageData {
        contacts,
        search_query,
    })
}

/// Fetches a live contact by its raw path identifier.
pub fn get_contact<R>(repo: &R, contact_id: i32) -> ServiceResult<Contact>
where
    R: ContactReader + ?Sized,
{
    let id = parse_contact_id(contact_id)?;
    repo.get_contact_by_id(id)
        .map_err(|err| {
            log::error!("Failed to get contact {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)
}

/// Validates the draft and persists a new contact.
pub fn create_contact<R>(repo: &R, draft: &ContactDraft) -> ServiceResult<Contact>
where
    R: ContactReader + ContactWriter + ?Sized,
{
    let contact = validate_contact(repo, draft, None)?;

    repo.create_contact(&contact).map_err(|err| {
        log::error!("Failed to create contact: {err}");
        ServiceError::from(err)
    })
}

/// Re-validates the draft against everyone but itself and saves it.
pub fn update_contact<R>(repo: &R, contact_id: i32, draft: &ContactDraft) -> ServiceResult<Contact>
where
    R: ContactReader + ContactWriter + ?Sized,
{
    let id = parse_contact_id(contact_id)?;
    let contact = validate_contact(repo, draft, Some(id))?;

    repo.update_contact(id, &contact).map_err(|err| {
        log::error!("Failed to update contact {id}: {err}");
        ServiceError::from(err)
    })
}

/// Soft-deletes the contact.
pub fn delete_contact<R>(repo: &R, contact_id: i32) -> ServiceResult<()>
where
    R: ContactWriter + ?Sized,
{
    let id = parse_contact_id(contact_id)?;
    repo.delete_contact(id).map_err(|err| {
        log::error!("Failed to delete contact {id}: {err}");
        ServiceError::from(err)
    })
}

/// Inline email check used while the form is being filled in.
///
/// `contact_id` is the contact being edited, or `0` for a new one.
pub fn check_email_field<R>(repo: &R, contact_id: i32, email: &str) -> Result<(), ValidationError>
where
    R: ContactReader + ?Sized,
{
    let existing = ContactId::new(contact_id).ok();
    check_email(repo, email, existing).map(|_| ())
}
