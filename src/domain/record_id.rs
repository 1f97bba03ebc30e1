//! RecordId value object.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroU64;

/// Store-assigned identifier for a persisted contact record.
///
/// Identifiers are positive and issued in increasing order by the table
/// that owns the record, so a valid id can never be confused with a
/// "not saved" marker.
///
/// # Example
///
/// ```
/// use contact_crm::domain::RecordId;
///
/// let id = RecordId::new(7).unwrap();
/// assert_eq!(id.get(), 7);
/// assert!(RecordId::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(NonZeroU64);

impl RecordId {
    /// The first id a fresh table hands out.
    pub const FIRST: RecordId = RecordId(NonZeroU64::MIN);

    /// Create a RecordId, rejecting zero.
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    /// Get the numeric value.
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// The id following this one.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

// Serde support - serialize as a plain integer
impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.get().serialize(serializer)
    }
}

// Serde support - deserialize from integer with validation
impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u64::deserialize(deserializer)?;
        RecordId::new(raw).ok_or_else(|| serde::de::Error::custom("record id cannot be zero"))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
