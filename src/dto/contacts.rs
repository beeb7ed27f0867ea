//! DTOs shaped for the contact list and form templates.

use serde::Serialize;

use crate::domain::contact::{Contact, ContactDraft};
use crate::domain::validation::ValidationError;
use crate::pagination::Paginated;

/// Query parameters accepted by the index page service.
#[derive(Debug, Default)]
pub struct IndexQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Raw page parameter; anything unparsable means page 1.
    pub page: Option<String>,
}

/// Data required to render the contacts index template.
pub struct IndexPageData {
    /// Current page of contacts with pagination counters.
    pub contacts: Paginated<Contact>,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
}

/// Which of the two contact forms is being rendered.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormView {
    New,
    Edit,
}

/// Everything `contacts/form.html` needs, for both new and edit forms.
#[derive(Debug, Serialize)]
pub struct ContactFormView {
    pub contact: ContactDraft,
    /// Id of the contact being edited; `0` on the new-contact form.
    pub contact_id: i32,
    pub form_action: String,
    pub view: FormView,
    pub error: Option<String>,
    /// Form field the error belongs to, used to highlight the input.
    pub error_field: Option<&'static str>,
}

impl ContactFormView {
    pub fn new_contact(contact: ContactDraft) -> Self {
        Self {
            contact,
            contact_id: 0,
            form_action: "/contacts/new".to_string(),
            view: FormView::New,
            error: None,
            error_field: None,
        }
    }

    pub fn edit_contact(contact_id: i32, contact: ContactDraft) -> Self {
        Self {
            contact,
            contact_id,
            form_action: format!("/contacts/{contact_id}/edit"),
            view: FormView::Edit,
            error: None,
            error_field: None,
        }
    }

    #[must_use]
    pub fn with_error(mut self, err: &ValidationError) -> Self {
        self.error = Some(err.to_string());
        self.error_field = err.field().map(|field| field.as_str());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::ContactField;

    #[test]
    fn edit_form_posts_back_to_contact() {
        let view = ContactFormView::edit_contact(12, ContactDraft::default());
        assert_eq!(view.form_action, "/contacts/12/edit");
        assert_eq!(view.view, FormView::Edit);
        assert_eq!(view.contact_id, 12);
    }

    #[test]
    fn error_is_attached_to_field() {
        let view = ContactFormView::new_contact(ContactDraft::default())
            .with_error(&ValidationError::DuplicateValue(ContactField::Email));
        assert_eq!(view.error.as_deref(), Some("email already in use"));
        assert_eq!(view.error_field, Some("email"));
        assert_eq!(view.form_action, "/contacts/new");
    }
}
