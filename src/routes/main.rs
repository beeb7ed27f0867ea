use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::routes::{not_found, redirect};

#[get("/")]
pub async fn index() -> impl Responder {
    redirect("/contacts")
}

/// Fallback for unknown routes.
pub async fn not_found_page(tera: web::Data<Tera>) -> HttpResponse {
    not_found(&tera)
}
