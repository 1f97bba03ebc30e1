//! Contact CRM - a contact record layer served over the Model Context Protocol.
//!
//! Contacts are identified by their exact first and last name. They can be
//! validated on demand, saved once per name pair, deleted, and listed.
//!
//! # Architecture
//!
//! - **domain**: Validation rules and the store-assigned record id
//! - **models**: The contact entity and its persisted record form
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Document storage backends (in-memory, JSON file)
//! - **services**: The contact store with its save/delete/lookup rules
//! - **server**: MCP protocol server exposing the store as tools

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::Config;
pub use domain::{RecordId, ValidationError};
pub use error::{ConfigError, ContactStoreError, StoreError};
pub use models::{Contact, ContactRecord};
pub use repositories::{ContactRepository, InMemoryContactRepository, JsonFileContactRepository};
pub use server::ContactMcpServer;
pub use services::{ContactStore, SaveOutcome};
