use super::table::ContactTable;
use crate::domain::RecordId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactRecord};
use crate::repositories::traits::ContactRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

/// Contact repository backed by a single JSON document file.
///
/// The whole table is loaded at open and kept in memory. Every mutation
/// rewrites the file: the new content goes to a sibling `.tmp` file which
/// is then renamed over the original, so a crash mid-write leaves the
/// previous version intact.
#[derive(Debug)]
pub struct JsonFileContactRepository {
    path: PathBuf,
    table: ContactTable,
}

impl JsonFileContactRepository {
    /// Open the table file at `path`.
    ///
    /// A missing or blank file opens as an empty table; the file is created
    /// on the first write.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be read, and
    /// `StoreError::Json` if its content is not a valid table.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let table = match fs::read_to_string(&path) {
            Ok(content) => ContactTable::from_json(&content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No table file at {}, starting empty", path.display());
                ContactTable::new()
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            "Opened contact table {} ({} records)",
            path.display(),
            table.len()
        );

        Ok(Self { path, table })
    }

    fn persist(&self) -> StoreResult<()> {
        let json = self.table.to_json()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!(
            "Wrote {} records to {}",
            self.table.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl ContactRepository for JsonFileContactRepository {
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
        // Write a candidate table first so a failed write leaves memory untouched.
        let mut next = self.table.clone();
        let id = next.insert(contact)?;
        let previous = std::mem::replace(&mut self.table, next);

        if let Err(e) = self.persist() {
            self.table = previous;
            return Err(e);
        }
        Ok(id)
    }

    fn remove(&mut self, id: RecordId) -> StoreResult<bool> {
        let mut next = self.table.clone();
        if !next.remove(id) {
            return Ok(false);
        }
        let previous = std::mem::replace(&mut self.table, next);

        if let Err(e) = self.persist() {
            self.table = previous;
            return Err(e);
        }
        Ok(true)
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.table.len())
    }

    fn flush(&mut self) -> StoreResult<()> {
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use tempfile::tempdir;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");

        let repo = JsonFileContactRepository::open(&path).unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(!path.exists(), "opening must not create the file");
    }

    #[test]
    fn test_insert_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");

        let mut repo = JsonFileContactRepository::open(&path).unwrap();
        let id = repo
            .insert(&Contact::with_details("Alice", "Smith", "0123456789", "1 rue"))
            .unwrap();
        assert_eq!(id, RecordId::FIRST);

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["_default"]["1"]["last_name"], "Smith");
        assert!(!dir.path().join("db.json.tmp").exists());
    }

    #[test]
    fn test_reopen_keeps_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");

        {
            let mut repo = JsonFileContactRepository::open(&path).unwrap();
            repo.insert(&Contact::new("Alice", "Smith")).unwrap();
            let bob = repo.insert(&Contact::new("Bob", "Maurane")).unwrap();
            assert!(repo.remove(bob).unwrap());
            repo.insert(&Contact::new("Carol", "Brown")).unwrap();
        }

        let mut repo = JsonFileContactRepository::open(&path).unwrap();
        let names: Vec<String> = repo
            .all()
            .unwrap()
            .into_iter()
            .map(|r| r.contact.full_name())
            .collect();
        assert_eq!(names, vec!["Alice Smith", "Carol Brown"]);

        let next = repo.insert(&Contact::new("Dan", "Green")).unwrap();
        assert_eq!(next.get(), 4);
    }

    #[test]
    fn test_remove_missing_id_does_not_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");

        let mut repo = JsonFileContactRepository::open(&path).unwrap();
        assert!(!repo.remove(RecordId::FIRST).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_open_creates_parent_dirs_on_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("db.json");

        let mut repo = JsonFileContactRepository::open(&path).unwrap();
        repo.flush().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_rewrite_keeps_unknown_tables_and_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(
            &path,
            r#"{
                "_default": {"1": {"first_name": "Old", "last_name": "Rec", "tags": ["x"]}},
                "archive": {"1": {"first_name": "Old", "last_name": "Rec"}}
            }"#,
        )
        .unwrap();

        let mut repo = JsonFileContactRepository::open(&path).unwrap();
        assert_eq!(repo.count().unwrap(), 1);
        repo.insert(&Contact::new("Alice", "Smith")).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["archive"]["1"]["last_name"], "Rec");
        assert_eq!(written["_default"]["1"]["tags"], serde_json::json!(["x"]));
        assert_eq!(written["_default"]["2"]["first_name"], "Alice");
    }

    #[test]
    fn test_failed_insert_leaves_table_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        // A directory in the temp file's place makes the write fail.
        fs::create_dir(dir.path().join("db.json.tmp")).unwrap();

        let mut repo = JsonFileContactRepository::open(&path).unwrap();
        assert!(matches!(
            repo.insert(&Contact::new("Alice", "Smith")),
            Err(StoreError::Io(_))
        ));
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.find_by_name("Alice", "Smith").unwrap().is_none());
        assert!(!path.exists());

        fs::remove_dir(dir.path().join("db.json.tmp")).unwrap();
        assert_eq!(
            repo.insert(&Contact::new("Alice", "Smith")).unwrap(),
            RecordId::FIRST
        );
    }

    #[test]
    fn test_failed_remove_keeps_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");

        let mut repo = JsonFileContactRepository::open(&path).unwrap();
        let id = repo.insert(&Contact::new("Alice", "Smith")).unwrap();
        fs::create_dir(dir.path().join("db.json.tmp")).unwrap();

        assert!(matches!(repo.remove(id), Err(StoreError::Io(_))));
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.find_by_name("Alice", "Smith").unwrap().unwrap().id, id);

        let on_disk = JsonFileContactRepository::open(&path).unwrap();
        assert_eq!(on_disk.count().unwrap(), 1);
    }

    #[test]
    fn test_open_corrupt_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, "{not json").unwrap();

        let result = JsonFileContactRepository::open(&path);
        assert!(matches!(result, Err(StoreError::Json(_))));
    }
}
