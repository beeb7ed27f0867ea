//! Domain entities and rules for the contact book.

pub mod contact;
pub mod types;
pub mod validation;
