use crate::domain::RecordId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactRecord};

/// Repository for persisted contact documents.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (in-memory, JSON file, mock). Operations are
/// synchronous and run to completion; callers that share a repository
/// across tasks must serialize access themselves.
pub trait ContactRepository: Send {
    /// Every record, in id order.
    fn all(&self) -> StoreResult<Vec<ContactRecord>>;

    /// The first record, in id order, whose names equal the given pair exactly.
    fn find_by_name(&self, first_name: &str, last_name: &str)
        -> StoreResult<Option<ContactRecord>>;

    /// Persist a new document and return the id assigned to it.
    fn insert(&mut self, contact: &Contact) -> StoreResult<RecordId>;

    /// Remove a document. Returns `false` if no document had this id.
    fn remove(&mut self, id: RecordId) -> StoreResult<bool>;

    /// Number of stored documents.
    fn count(&self) -> StoreResult<usize>;

    /// Push any buffered state to durable storage.
    fn flush(&mut self) -> StoreResult<()>;
}
