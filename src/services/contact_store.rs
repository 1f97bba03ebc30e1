//! Contact store.
//!
//! Existence checks, insert-if-absent and delete-if-present for contacts,
//! keyed by the exact (first name, last name) pair.

use crate::domain::RecordId;
use crate::error::{ContactStoreResult, StoreResult};
use crate::models::{Contact, ContactRecord};
use crate::repositories::ContactRepository;
use tracing::{debug, info, warn};

/// Result of [`ContactStore::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new record was written under this id.
    Inserted(RecordId),

    /// A record with the same name pair is already stored; nothing was written.
    AlreadyExists,
}

impl SaveOutcome {
    /// The new record's id, if one was written.
    pub fn id(self) -> Option<RecordId> {
        match self {
            Self::Inserted(id) => Some(id),
            Self::AlreadyExists => None,
        }
    }

    pub fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted(_))
    }
}

/// The persistence boundary for contacts.
///
/// Lookups are by exact name pair. There is no update: saving a contact
/// whose name pair is already stored leaves the stored fields alone.
pub struct ContactStore {
    repo: Box<dyn ContactRepository>,
}

impl ContactStore {
    /// Create a store over the given repository.
    pub fn new(repo: Box<dyn ContactRepository>) -> Self {
        Self { repo }
    }

    /// Find the stored record with `contact`'s name pair.
    pub fn find(&self, contact: &Contact) -> StoreResult<Option<ContactRecord>> {
        let found = self
            .repo
            .find_by_name(&contact.first_name, &contact.last_name)?;
        debug!(
            "Lookup for '{}': {}",
            contact.full_name(),
            found
                .as_ref()
                .map(|r| format!("record {}", r.id))
                .unwrap_or_else(|| "absent".to_string())
        );
        Ok(found)
    }

    /// Whether a record with `contact`'s name pair is stored.
    pub fn exists(&self, contact: &Contact) -> StoreResult<bool> {
        Ok(self.find(contact)?.is_some())
    }

    /// Remove the record with `contact`'s name pair.
    ///
    /// Returns the removed id, or an empty list when nothing matched.
    /// Deleting an absent contact is not an error.
    pub fn delete(&mut self, contact: &Contact) -> StoreResult<Vec<RecordId>> {
        let Some(record) = self.find(contact)? else {
            debug!("Nothing to delete for '{}'", contact.full_name());
            return Ok(Vec::new());
        };

        if self.repo.remove(record.id)? {
            info!("Deleted contact '{}' (record {})", contact.full_name(), record.id);
            Ok(vec![record.id])
        } else {
            Ok(Vec::new())
        }
    }

    /// Store `contact` unless its name pair is already stored.
    ///
    /// With `validate` set, the contact is checked first and a failure aborts
    /// the save before anything is read or written. Without it, any field
    /// values are accepted.
    ///
    /// # Errors
    ///
    /// - `ContactStoreError::Validation` when validation is requested and fails
    /// - `ContactStoreError::Storage` when the repository fails
    pub fn save(&mut self, contact: &Contact, validate: bool) -> ContactStoreResult<SaveOutcome> {
        if validate {
            if let Err(e) = contact.validate() {
                warn!("Rejected contact '{}': {}", contact.full_name(), e);
                return Err(e.into());
            }
        }

        if self.exists(contact)? {
            debug!("Contact '{}' already stored, not saving", contact.full_name());
            return Ok(SaveOutcome::AlreadyExists);
        }

        let id = self.repo.insert(contact)?;
        info!("Saved contact '{}' as record {}", contact.full_name(), id);
        Ok(SaveOutcome::Inserted(id))
    }

    /// Every stored contact, in insertion order.
    pub fn list_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(self
            .repo
            .all()?
            .into_iter()
            .map(ContactRecord::into_contact)
            .collect())
    }

    /// Number of stored contacts.
    pub fn len(&self) -> StoreResult<usize> {
        self.repo.count()
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Push pending state to durable storage.
    pub fn flush(&mut self) -> StoreResult<()> {
        self.repo.flush()
    }

    /// Flush and release the store.
    pub fn close(mut self) -> StoreResult<()> {
        self.flush()?;
        info!("Contact store closed");
        Ok(())
    }
}
