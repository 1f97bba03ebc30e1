//! Domain rules and value objects.
//!
//! Name and phone number validation, the validation error type, and the
//! store-assigned record identifier.

pub mod errors;
pub mod names;
pub mod phone;
pub mod record_id;

pub use errors::ValidationError;
pub use names::validate_names;
pub use phone::{normalize_phone_number, validate_phone_number};
pub use record_id::RecordId;
