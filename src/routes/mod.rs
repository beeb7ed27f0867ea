//! HTTP handlers and the helpers they share.

use std::collections::HashMap;

use actix_web::error::{InternalError, PathError};
use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera, Value};

pub mod contacts;
pub mod main;

/// Maps a flash message level to the Bootstrap alert class.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// 303 redirect, so browsers follow up POST and DELETE requests with a GET.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Template context with the pending flash messages, which are consumed by reading them.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_with_status(tera, template, context, StatusCode::OK)
}

pub fn render_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// The 404 page.
pub fn not_found(tera: &Tera) -> HttpResponse {
    let mut context = Context::new();
    context.insert("alerts", &Vec::<(String, String)>::new());
    context.insert("current_page", "");
    render_with_status(tera, "not_found.html", &context, StatusCode::NOT_FOUND)
}

/// `PathConfig` error handler: a path segment that does not parse (e.g. a
/// non-numeric contact id) gets the regular 404 page.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Unparsable path {}: {err}", req.path());
    let response = match req.app_data::<web::Data<Tera>>() {
        Some(tera) => not_found(tera),
        None => HttpResponse::NotFound().finish(),
    };
    InternalError::from_response(err, response).into()
}

/// True when htmx issued the request from the live search input.
pub fn is_active_search(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Trigger")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|trigger| trigger == "search")
}

/// Formats a stored digits-only phone number for display.
///
/// Ten digits render as `(555) 123-4567`, eleven as `1-555-123-4567`; anything
/// else is returned unchanged.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10]),
        11 => format!(
            "{}-{}-{}-{}",
            &digits[0..1],
            &digits[1..4],
            &digits[4..7],
            &digits[7..11]
        ),
        _ => phone.to_string(),
    }
}

/// Tera filter wrapping [`format_phone`].
pub fn format_phone_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let phone = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("format_phone expects a string"))?;
    Ok(Value::String(format_phone(phone)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_phone_groups_digits() {
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
        assert_eq!(format_phone("15551234567"), "1-555-123-4567");
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("12345"), "12345");
    }

    #[test]
    fn format_phone_filter_rejects_non_strings() {
        let args = HashMap::new();
        assert_eq!(
            format_phone_filter(&Value::String("5551234567".into()), &args).unwrap(),
            Value::String("(555) 123-4567".into())
        );
        assert!(format_phone_filter(&Value::Bool(true), &args).is_err());
    }

    #[test]
    fn redirect_uses_see_other() {
        let response = redirect("/contacts");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/contacts"
        );
    }
}
