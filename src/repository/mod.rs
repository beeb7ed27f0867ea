use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        contact::{Contact, SanitizedContact},
        types::ContactId,
    },
    repository::errors::RepositoryResult,
};

pub mod contact;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Rows to skip before this page starts. Page 0 is treated as page 1.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

/// Filter and window for listing live contacts, always ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactListQuery {
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ContactListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to contacts containing `term`; blank terms are ignored.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_string());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ContactReader {
    fn get_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>>;
    /// Looks up a live contact owning `email`, skipping the contact `exclude`.
    fn find_contact_by_email(
        &self,
        email: &str,
        exclude: Option<ContactId>,
    ) -> RepositoryResult<Option<Contact>>;
    /// Counts contacts matching the query filter. Pagination is ignored.
    fn count_contacts(&self, query: &ContactListQuery) -> RepositoryResult<usize>;
    fn list_contacts(&self, query: &ContactListQuery) -> RepositoryResult<Vec<Contact>>;
}

pub trait ContactWriter {
    fn create_contact(&self, contact: &SanitizedContact) -> RepositoryResult<Contact>;
    fn create_contacts(&self, contacts: &[SanitizedContact]) -> RepositoryResult<usize>;
    fn update_contact(
        &self,
        id: ContactId,
        contact: &SanitizedContact,
    ) -> RepositoryResult<Contact>;
    /// Marks the contact deleted; it disappears from every read afterwards.
    fn delete_contact(&self, id: ContactId) -> RepositoryResult<()>;
    /// Physically removes every contact and restarts id assignment at 1.
    fn purge_contacts(&self) -> RepositoryResult<usize>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
