//! Replaces the contacts table with generated demo rows.
//!
//! Usage: `seed_contacts [COUNT]`, defaulting to 8192 contacts.

use std::env;

use dotenvy::dotenv;

use contact_book::db::{establish_connection_pool, run_migrations};
use contact_book::models::config::ServerConfig;
use contact_book::repository::DieselRepository;
use contact_book::services::seed::{DEFAULT_SEED_COUNT, seed_contacts};

fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let count = match env::args().nth(1) {
        Some(raw) => match raw.parse::<usize>() {
            Ok(count) => count,
            Err(err) => {
                log::error!("Invalid contact count '{raw}': {err}");
                std::process::exit(2);
            }
        },
        None => DEFAULT_SEED_COUNT,
    };

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run_migrations(&pool) {
        log::error!("Failed to run migrations: {err}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);

    match seed_contacts(&repo, count) {
        Ok(inserted) => log::info!("Seeded {inserted} contacts"),
        Err(err) => {
            log::error!("Seeding failed: {err}");
            std::process::exit(1);
        }
    }
}
