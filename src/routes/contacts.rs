use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::domain::contact::ContactDraft;
use crate::dto::contacts::ContactFormView;
use crate::forms::contact::{ContactForm, EmailCheckQuery};
use crate::repository::DieselRepository;
use crate::routes::{
    base_context, is_active_search, not_found, redirect, render_template, render_with_status,
};
use crate::services::contacts::{self as contacts_service, IndexQuery};
use crate::services::ServiceError;

#[derive(Deserialize)]
pub struct IndexQueryParams {
    q: Option<String>,
    page: Option<String>,
}

fn render_form(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    view: &ContactFormView,
    status: StatusCode,
) -> HttpResponse {
    let mut context = base_context(flash_messages, "contacts");
    context.insert("form", view);
    render_with_status(tera, "contacts/form.html", &context, status)
}

#[get("/contacts")]
pub async fn show_contacts(
    req: HttpRequest,
    params: web::Query<IndexQueryParams>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();
    let query = IndexQuery {
        search: params.q,
        page: params.page,
    };

    match contacts_service::load_index_page(repo.get_ref(), query) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "contacts");
            context.insert("contacts", &data.contacts);
            context.insert("next_page", &data.contacts.next_page());
            context.insert("search_query", &data.search_query);

            let template = if is_active_search(&req) {
                "contacts/rows.html"
            } else {
                "contacts/index.html"
            };
            render_template(&tera, template, &context)
        }
        Err(err) => {
            log::error!("Failed to list contacts: {err}");
            HttpResponse::InternalServerError().body("Failed to retrieve contacts")
        }
    }
}

#[get("/contacts/new")]
pub async fn new_contact(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let view = ContactFormView::new_contact(ContactDraft::default());
    render_form(&tera, &flash_messages, &view, StatusCode::OK)
}

#[post("/contacts/new")]
pub async fn create_contact(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<ContactForm>,
) -> impl Responder {
    let draft = ContactDraft::from(form);

    match contacts_service::create_contact(repo.get_ref(), &draft) {
        Ok(_) => {
            FlashMessage::success("Contact created.").send();
            redirect("/contacts")
        }
        Err(ServiceError::Validation(err)) => {
            let view = ContactFormView::new_contact(draft).with_error(&err);
            render_form(&tera, &flash_messages, &view, StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(err) => {
            log::error!("Failed to create contact: {err}");
            HttpResponse::InternalServerError().body("Failed to save contact.")
        }
    }
}

#[get("/contacts/{contact_id}")]
pub async fn show_contact(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match contacts_service::get_contact(repo.get_ref(), contact_id.into_inner()) {
        Ok(contact) => {
            let mut context = base_context(&flash_messages, "contacts");
            context.insert("contact", &contact);
            render_template(&tera, "contacts/show.html", &context)
        }
        Err(ServiceError::NotFound) => not_found(&tera),
        Err(err) => {
            log::error!("Failed to get contact: {err}");
            HttpResponse::InternalServerError().body("Database error")
        }
    }
}

#[get("/contacts/{contact_id}/edit")]
pub async fn edit_contact(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match contacts_service::get_contact(repo.get_ref(), contact_id.into_inner()) {
        Ok(contact) => {
            let view = ContactFormView::edit_contact(contact.id.get(), ContactDraft::from(&contact));
            render_form(&tera, &flash_messages, &view, StatusCode::OK)
        }
        Err(ServiceError::NotFound) => not_found(&tera),
        Err(err) => {
            log::error!("Failed to get contact: {err}");
            HttpResponse::InternalServerError().body("Database error")
        }
    }
}

#[post("/contacts/{contact_id}/edit")]
pub async fn update_contact(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<ContactForm>,
) -> impl Responder {
    let contact_id = contact_id.into_inner();
    let draft = ContactDraft::from(form);

    match contacts_service::update_contact(repo.get_ref(), contact_id, &draft) {
        Ok(contact) => {
            FlashMessage::success("Contact updated.").send();
            redirect(&format!("/contacts/{}", contact.id))
        }
        Err(ServiceError::Validation(err)) => {
            let view = ContactFormView::edit_contact(contact_id, draft).with_error(&err);
            render_form(&tera, &flash_messages, &view, StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Contact not found.").send();
            redirect("/contacts")
        }
        Err(err) => {
            log::error!("Failed to update contact: {err}");
            HttpResponse::InternalServerError().body("Failed to update contact.")
        }
    }
}

#[delete("/contacts/{contact_id}")]
pub async fn delete_contact(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match contacts_service::delete_contact(repo.get_ref(), contact_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Contact deleted.").send();
            redirect("/contacts")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Contact not found.").send();
            redirect("/contacts")
        }
        Err(err) => {
            log::error!("Failed to delete contact: {err}");
            HttpResponse::InternalServerError().body("Failed to delete contact.")
        }
    }
}

/// Inline validation for the email input. An empty body means the address is
/// usable; otherwise the body is the message to show under the field.
#[get("/contacts/{contact_id}/validate/email")]
pub async fn validate_email(
    contact_id: web::Path<i32>,
    query: web::Query<EmailCheckQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let message = match contacts_service::check_email_field(
        repo.get_ref(),
        contact_id.into_inner(),
        &query.email,
    ) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    };

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(message)
}
