//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! cross-layer `From` impls live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod service {
    use crate::domain::validation::{ContactField, ValidationError};
    use crate::repository::errors::RepositoryError;
    use crate::services::ServiceError;

    impl From<RepositoryError> for ServiceError {
        fn from(err: RepositoryError) -> Self {
            match err {
                RepositoryError::NotFound => ServiceError::NotFound,
                // The live-email index is the only unique constraint on contacts,
                // so a collision means another writer took the address first.
                RepositoryError::UniqueViolation(_) => {
                    ServiceError::Validation(ValidationError::DuplicateValue(ContactField::Email))
                }
                other => ServiceError::StorageUnavailable(other.to_string()),
            }
        }
    }

    impl From<ValidationError> for ServiceError {
        fn from(err: ValidationError) -> Self {
            match err {
                ValidationError::StorageUnavailable => {
                    ServiceError::StorageUnavailable(err.to_string())
                }
                other => ServiceError::Validation(other),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn repository_errors_map_to_service_errors() {
            assert!(matches!(
                ServiceError::from(RepositoryError::NotFound),
                ServiceError::NotFound
            ));
            assert!(matches!(
                ServiceError::from(RepositoryError::UniqueViolation("email".into())),
                ServiceError::Validation(ValidationError::DuplicateValue(ContactField::Email))
            ));
            assert!(matches!(
                ServiceError::from(RepositoryError::ConnectionError("down".into())),
                ServiceError::StorageUnavailable(_)
            ));
        }

        #[test]
        fn lookup_outage_is_not_a_form_error() {
            assert!(matches!(
                ServiceError::from(ValidationError::StorageUnavailable),
                ServiceError::StorageUnavailable(_)
            ));
            assert!(matches!(
                ServiceError::from(ValidationError::InvalidFormat(ContactField::Phone)),
                ServiceError::Validation(ValidationError::InvalidFormat(ContactField::Phone))
            ));
        }
    }
}
