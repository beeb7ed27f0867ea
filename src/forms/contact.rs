use serde::Deserialize;

use crate::domain::contact::ContactDraft;

#[derive(Debug, Deserialize)]
/// Form data posted by both the new and edit contact forms.
///
/// Missing fields deserialize as empty so that validation, not the extractor,
/// reports them.
pub struct ContactForm {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl From<ContactForm> for ContactDraft {
    fn from(form: ContactForm) -> Self {
        ContactDraft::new(form.first, form.last, form.email, form.phone)
    }
}

#[derive(Debug, Deserialize)]
/// Query string of the inline email validation endpoint.
pub struct EmailCheckQuery {
    #[serde(default)]
    pub email: String,
}
