//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::contact::{Contact, SanitizedContact};
use crate::domain::types::ContactId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ContactListQuery, ContactReader, ContactWriter};

mock! {
    pub Repository {}

    impl ContactReader for Repository {
        fn get_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>>;
        fn find_contact_by_email(
            &self,
            email: &str,
            exclude: Option<ContactId>,
        ) -> RepositoryResult<Option<Contact>>;
        fn count_contacts(&self, query: &ContactListQuery) -> RepositoryResult<usize>;
        fn list_contacts(&self, query: &ContactListQuery) -> RepositoryResult<Vec<Contact>>;
    }

    impl ContactWriter for Repository {
        fn create_contact(&self, contact: &SanitizedContact) -> RepositoryResult<Contact>;
        fn create_contacts(&self, contacts: &[SanitizedContact]) -> RepositoryResult<usize>;
        fn update_contact(
            &self,
            id: ContactId,
            contact: &SanitizedContact,
        ) -> RepositoryResult<Contact>;
        fn delete_contact(&self, id: ContactId) -> RepositoryResult<()>;
        fn purge_contacts(&self) -> RepositoryResult<usize>;
    }
}
