//! Database and configuration models.

pub mod contact;
#[cfg(feature = "server")]
pub mod config;
