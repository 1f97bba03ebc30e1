use crate::domain::RecordId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactRecord};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// In-memory document table shared by the repository backends.
///
/// Documents are kept in id order. Because ids are issued in increasing
/// order, iteration order is also insertion order.
///
/// Content the table does not model (other top-level tables, extra keys
/// on a document) is kept as-is and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactTable {
    documents: BTreeMap<RecordId, StoredDocument>,
    other_tables: Map<String, Value>,
    last_id: Option<RecordId>,
}

/// A contact document plus any keys it carries beyond the contact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct StoredDocument {
    #[serde(flatten)]
    contact: Contact,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// On-disk shape of a table file: `{"_default": {"1": {...}, "2": {...}}}`.
#[derive(Debug, Default, Deserialize)]
struct TableFile {
    #[serde(rename = "_default", default)]
    documents: BTreeMap<RecordId, StoredDocument>,

    #[serde(flatten)]
    other_tables: Map<String, Value>,
}

impl ContactTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table file. Blank input is an empty table.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        if json.trim().is_empty() {
            return Ok(Self::new());
        }

        let file: TableFile = serde_json::from_str(json)?;
        let last_id = file.documents.keys().next_back().copied();

        Ok(Self {
            documents: file.documents,
            other_tables: file.other_tables,
            last_id,
        })
    }

    /// Render the table in its file format.
    pub fn to_json(&self) -> StoreResult<String> {
        #[derive(Serialize)]
        struct TableFileRef<'a> {
            #[serde(rename = "_default")]
            documents: &'a BTreeMap<RecordId, StoredDocument>,

            #[serde(flatten)]
            other_tables: &'a Map<String, Value>,
        }

        Ok(serde_json::to_string_pretty(&TableFileRef {
            documents: &self.documents,
            other_tables: &self.other_tables,
        })?)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// First document, in id order, with this exact name pair.
    pub fn find_by_name(&self, first_name: &str, last_name: &str) -> Option<ContactRecord> {
        self.documents
            .iter()
            .find(|(_, d)| d.contact.first_name == first_name && d.contact.last_name == last_name)
            .map(|(id, d)| ContactRecord::new(*id, d.contact.clone()))
    }

    pub fn records(&self) -> Vec<ContactRecord> {
        self.documents
            .iter()
            .map(|(id, d)| ContactRecord::new(*id, d.contact.clone()))
            .collect()
    }

    /// Store a copy of `contact` under a fresh id.
    pub fn insert(&mut self, contact: &Contact) -> StoreResult<RecordId> {
        let id = match self.last_id {
            None => RecordId::FIRST,
            Some(last) => last
                .next()
                .ok_or_else(|| StoreError::CorruptTable("record id space exhausted".to_string()))?,
        };

        self.documents.insert(
            id,
            StoredDocument {
                contact: contact.clone(),
                extra: Map::new(),
            },
        );
        self.last_id = Some(id);
        Ok(id)
    }

    /// Remove the document with this id. Returns whether one was removed.
    pub fn remove(&mut self, id: RecordId) -> bool {
        self.documents.remove(&id).is_some()
    }
}
