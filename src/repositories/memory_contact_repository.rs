use super::table::ContactTable;
use crate::domain::RecordId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactRecord};
use crate::repositories::traits::ContactRepository;

/// Contact repository held entirely in memory.
///
/// Nothing survives the process. Used by tests and anywhere an isolated,
/// throwaway store is wanted.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    table: ContactTable,
}

impl InMemoryContactRepository {
    /// Create an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn all(&self) -> StoreResult<Vec<ContactRecord>> {
        Ok(self.table.records())
    }

    fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> StoreResult<Option<ContactRecord>> {
        Ok(self.table.find_by_name(first_name, last_name))
    }

    fn insert(&mut self, contact: &Contact) -> StoreResult<RecordId> {
        self.table.insert(contact)
    }

    fn remove(&mut self, id: RecordId) -> StoreResult<bool> {
        Ok(self.table.remove(id))
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.table.len())
    }

    fn flush(&mut self) -> StoreResult<()> {
        Ok(())
    }
}
