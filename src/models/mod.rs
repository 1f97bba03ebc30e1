//! Data models for CRM entities.

pub mod contact;

pub use contact::{Contact, ContactRecord};
