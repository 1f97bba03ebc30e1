//! Application service layer.
//!
//! Services hold the business rules and sit between the MCP handlers and
//! the repositories.

mod contact_store;

pub use contact_store::{ContactStore, SaveOutcome};
