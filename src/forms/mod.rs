//! Form definitions backing the contact routes.

pub mod contact;
