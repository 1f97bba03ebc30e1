use contact_crm::domain::RecordId;
use contact_crm::error::{StoreError, StoreResult};
use contact_crm::models::{Contact, ContactRecord};
use contact_crm::repositories::{ContactRepository, ContactTable};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Wraps an in-memory table and tracks method calls for verification.
/// Clones share state, so a test can keep one handle while the store
/// owns another. Writes can be made to fail to exercise error paths.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    table: Arc<Mutex<ContactTable>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_writes: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact directly, bypassing call tracking.
    pub fn seed(&self, contact: Contact) -> RecordId {
        self.table.lock().unwrap().insert(&contact).unwrap()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    /// Make every subsequent insert/remove fail with an I/O error.
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    /// Number of stored contacts, without tracking.
    pub fn stored(&self) -> usize {
        self.table.lock().unwrap().len()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_writable(&self) -> StoreResult<()> {
        if *self.fail_writes.lock().unwrap() {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )));
        }
        Ok(())
    }
}

impl ContactRepository for MockContactRepository {
    fn all(&self) -> StoreResult<Vec<ContactRecord>> {
        self.track_call("all");
        Ok(self.table.lock().unwrap().records())
    }

    fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<Option<ContactRecord>> {
        self.track_call("find_by_name");
        Ok(self.table.lock().unwrap().find_by_name(first_name, last_name))
    }

    fn insert(&mut self, contact: &Contact) -> StoreResult<RecordId> {
        self.track_call("insert");
        self.check_writable()?;
        self.table.lock().unwrap().insert(contact)
    }

    fn remove(&mut self, id: RecordId) -> StoreResult<bool> {
        self.track_call("remove");
        self.check_writable()?;
        Ok(self.table.lock().unwrap().remove(id))
    }

    fn count(&self) -> StoreResult<usize> {
        self.track_call("count");
        Ok(self.table.lock().unwrap().len())
    }

    fn flush(&mut self) -> StoreResult<()> {
        self.track_call("flush");
        Ok(())
    }
}
