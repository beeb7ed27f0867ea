#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::SessionMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;
#[cfg(feature = "server")]
use crate::routes::contacts::{
    create_contact, delete_contact, edit_contact, new_contact, show_contact, show_contacts,
    update_contact, validate_email,
};
#[cfg(feature = "server")]
use crate::routes::main::{index, not_found_page};

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Registers every application route. `/contacts/new` must come before
/// `/contacts/{contact_id}`.
#[cfg(feature = "server")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(routes::path_error_handler))
        .service(index)
        .service(show_contacts)
        .service(new_contact)
        .service(create_contact)
        .service(show_contact)
        .service(edit_contact)
        .service(update_contact)
        .service(delete_contact)
        .service(validate_email);
}

/// Loads templates from `glob` and registers the custom filters they use.
#[cfg(feature = "server")]
pub fn build_tera(glob: &str) -> Result<Tera, tera::Error> {
    let mut tera = Tera::new(glob)?;
    tera.register_filter("format_phone", routes::format_phone_filter);
    Ok(tera)
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let pool = db::establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let applied = db::run_migrations(&pool)
        .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;
    log::info!("Applied {applied} pending migrations");

    let repo = DieselRepository::new(pool);

    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid session secret: {e}")))?;

    let message_store = SessionMessageStore::default();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = build_tera(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", &server_config.assets_dir))
            .configure(configure)
            .default_service(web::to(not_found_page))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
