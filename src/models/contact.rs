//! Contact model: the person record kept by the CRM.

use crate::domain::{validate_names, validate_phone_number, RecordId, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the CRM.
///
/// Construction never validates, so a contact holding only a name pair can
/// be built purely to address a record for lookup or deletion. Call
/// [`Contact::validate`] (or save with validation enabled) to enforce the
/// field rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Contact {
    /// First name, half of the identity key
    pub first_name: String,

    /// Last name, half of the identity key
    pub last_name: String,

    /// Phone number as entered (may be empty)
    pub phone_number: String,

    /// Postal address, free text (may be empty)
    pub address: String,
}

impl Contact {
    /// Create a contact with only the identity fields set.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    /// Create a contact with all four fields.
    pub fn with_details(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            address: address.into(),
        }
    }

    /// Set the phone number.
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Set the address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check the name rules.
    pub fn validate_names(&self) -> Result<(), ValidationError> {
        validate_names(&self.first_name, &self.last_name)
    }

    /// Check the phone number rules.
    pub fn validate_phone_number(&self) -> Result<(), ValidationError> {
        validate_phone_number(&self.phone_number)
    }

    /// Check names, then the phone number. The first failure is returned.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_names()?;
        self.validate_phone_number()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}",
            self.full_name(),
            self.phone_number,
            self.address
        )
    }
}

/// A persisted contact together with the id the store assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    pub id: RecordId,

    #[serde(flatten)]
    pub contact: Contact,
}

impl ContactRecord {
    pub fn new(id: RecordId, contact: Contact) -> Self {
        Self { id, contact }
    }

    /// Drop the id and keep the contact.
    pub fn into_contact(self) -> Contact {
        self.contact
    }
}
