//! Error types for the contact CRM.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by a record repository.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the table file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The table file is not valid JSON or has the wrong shape
    #[error("Storage JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The table parsed but breaks a table invariant
    #[error("Corrupt contact table: {0}")]
    CorruptTable(String),
}

/// Errors raised by [`ContactStore`](crate::services::ContactStore) operations.
#[derive(Error, Debug)]
pub enum ContactStoreError {
    /// Validation was requested and the contact failed it
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The underlying repository failed
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ContactStoreError
pub type ContactStoreResult<T> = Result<T, ContactStoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
