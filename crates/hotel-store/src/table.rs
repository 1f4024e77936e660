//! # Tabular Store
//!
//! The in-memory table every domain repository is built on.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    TabularStore State                                   │
//! │                                                                         │
//! │        load()                                                          │
//! │          │                                                              │
//! │          ▼                                                              │
//! │     ┌─────────┐   update() / insert() / remove()   ┌─────────┐         │
//! │     │ LOADED  │ ─────────────────────────────────► │  DIRTY  │         │
//! │     │         │ ◄───────────────────────────────── │         │         │
//! │     └─────────┘          persist() succeeds         └─────────┘         │
//! │                                                                         │
//! │  Queries never change state. A failed persist leaves the store DIRTY:  │
//! │  the change is in memory but not on disk, and is NOT rolled back.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write-Back Columns
//! The header written by `persist` is the field order of the first record,
//! or the header captured at load time when the table is empty.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use hotel_core::{Predicate, Record};
use tracing::{debug, info, warn};

use crate::codec;
use crate::error::{StoreError, StoreResult};

/// An ordered, homogeneous collection of records backed by one table.
///
/// ## Usage
/// ```rust
/// use hotel_core::FieldMatch;
/// use hotel_store::TabularStore;
///
/// let csv = "Company Name,Company Type\nNorthwind,Logistics\nContoso,Consulting\n";
/// let mut store = TabularStore::load("Companies.csv", csv.as_bytes()).unwrap();
///
/// let hits = store.find_all(&FieldMatch::contains("Company Name", "wind"));
/// assert_eq!(hits.len(), 1);
///
/// let row = store.position(&FieldMatch::exact("Company Name", "Contoso")).unwrap();
/// store.update(row, &[("Company Type", "Advisory")]).unwrap();
/// assert!(store.is_dirty());
/// ```
#[derive(Debug, Clone)]
pub struct TabularStore {
    /// Label used in logs and errors (usually the file name).
    name: String,

    /// Header captured at load time.
    header: Vec<String>,

    /// Rows in file order.
    records: Vec<Record>,

    /// True while an in-memory mutation has not been persisted.
    dirty: bool,
}

impl TabularStore {
    /// Creates an empty store with the given columns.
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        TabularStore {
            name: name.into(),
            header: columns,
            records: Vec::new(),
            dirty: false,
        }
    }

    // =========================================================================
    // Load / Persist
    // =========================================================================

    /// Parses a delimited table with a header row.
    ///
    /// ## Returns
    /// * `Ok(TabularStore)` - Zero or more records in file order
    /// * `Err(StoreError::Format)` - No header, or a malformed row
    /// * `Err(StoreError::Io)` - The source could not be read
    pub fn load<R: Read>(name: impl Into<String>, source: R) -> StoreResult<Self> {
        let name = name.into();
        let (header, records) = codec::read_table(&name, source)?;
        Ok(TabularStore {
            name,
            header,
            records,
            dirty: false,
        })
    }

    /// Loads the table stored at `path`.
    ///
    /// The file is opened, fully read and closed before this returns.
    pub fn load_from_path(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let name = table_name(path);

        let file = File::open(path).map_err(|e| StoreError::io(path.display().to_string(), e))?;
        let store = Self::load(name, BufReader::new(file))?;

        info!(
            path = %path.display(),
            records = store.len(),
            columns = store.header.len(),
            "Table loaded"
        );
        Ok(store)
    }

    /// Serializes the header and every record, replacing whatever the
    /// destination held. Clears the dirty flag on success.
    pub fn persist<W: Write>(&mut self, destination: W) -> StoreResult<()> {
        let columns = self.columns();
        codec::write_table(&self.name, destination, &columns, &self.records)?;
        self.dirty = false;
        Ok(())
    }

    /// Rewrites the table file at `path`.
    ///
    /// The whole table is encoded before the file is opened, so a Schema
    /// failure leaves the file untouched. The write itself truncates in
    /// place; there is no journal and no atomic rename.
    pub fn persist_to_path(&mut self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let columns = self.columns();
        let mut encoded = Vec::new();
        codec::write_table(&self.name, &mut encoded, &columns, &self.records)?;

        let file = File::create(path).map_err(|e| StoreError::io(path.display().to_string(), e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&encoded)
            .and_then(|()| writer.flush())
            .map_err(|e| StoreError::io(path.display().to_string(), e))?;
        self.dirty = false;

        info!(path = %path.display(), records = self.len(), "Table persisted");
        Ok(())
    }

    // =========================================================================
    // Schema
    // =========================================================================

    /// Label used in logs and errors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column order used by `persist`.
    pub fn columns(&self) -> Vec<String> {
        match self.records.first() {
            Some(first) => first.field_names().map(str::to_string).collect(),
            None => self.header.clone(),
        }
    }

    /// Returns true when `field` is one of the write-back columns.
    pub fn has_column(&self, field: &str) -> bool {
        match self.records.first() {
            Some(first) => first.contains(field),
            None => self.header.iter().any(|c| c == field),
        }
    }

    /// Fails with a Format error naming the available columns when any of
    /// `fields` is absent.
    pub fn require_columns(&self, fields: &[&str]) -> StoreResult<()> {
        if let Some(missing) = fields.iter().find(|f| !self.has_column(f)) {
            return Err(StoreError::MissingColumn {
                table: self.name.clone(),
                missing: missing.to_string(),
                available: self.columns(),
            });
        }
        Ok(())
    }

    /// Fails with a Schema error when `record` has a field the table does
    /// not have.
    pub fn check_conforms(&self, record: &Record) -> StoreResult<()> {
        match record.field_names().find(|f| !self.has_column(f)) {
            Some(extra) => Err(StoreError::schema(&self.name, extra)),
            None => Ok(()),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The record at `index`.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Every record satisfying `predicate`, in store order.
    pub fn find_all<P: Predicate + ?Sized>(&self, predicate: &P) -> Vec<&Record> {
        self.records.iter().filter(|r| predicate.matches(r)).collect()
    }

    /// The first record satisfying `predicate`.
    pub fn find_unique<P: Predicate + ?Sized>(&self, predicate: &P) -> Option<&Record> {
        self.records.iter().find(|r| predicate.matches(r))
    }

    /// Index of the first record satisfying `predicate`.
    pub fn position<P: Predicate + ?Sized>(&self, predicate: &P) -> Option<usize> {
        self.records.iter().position(|r| predicate.matches(r))
    }

    /// Distinct values of `field` across all records.
    ///
    /// ## Returns
    /// * `Ok(set)` - Sorted distinct values; empty for an empty table
    /// * `Err(StoreError::Schema)` - `field` is not a column
    pub fn field_values(&self, field: &str) -> StoreResult<BTreeSet<String>> {
        if !self.has_column(field) {
            return Err(StoreError::schema(&self.name, field));
        }
        Ok(self
            .records
            .iter()
            .filter_map(|r| r.get(field))
            .map(str::to_string)
            .collect())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Overwrites fields of the record at `index`.
    ///
    /// Every field is checked against the record's own field set before
    /// anything is written, so a rejected update changes nothing. Updates
    /// never add fields.
    ///
    /// ## Returns
    /// * `Ok(())` - All fields written; the store is now dirty
    /// * `Err(StoreError::Schema)` - A field is not part of the record
    /// * `Err(StoreError::NotFound)` - `index` is out of range
    pub fn update(&mut self, index: usize, updates: &[(&str, &str)]) -> StoreResult<()> {
        let record = self
            .records
            .get_mut(index)
            .ok_or_else(|| StoreError::not_found(format!("Row in {}", self.name), index.to_string()))?;

        if let Some((field, _)) = updates.iter().find(|(field, _)| !record.contains(field)) {
            warn!(table = %self.name, field, "Rejected update of unknown field");
            return Err(StoreError::schema(&self.name, *field));
        }

        for (field, value) in updates {
            record.set(*field, *value);
        }
        self.dirty = true;

        debug!(table = %self.name, index, fields = updates.len(), "Record updated");
        Ok(())
    }

    /// Appends a record.
    ///
    /// Neither key uniqueness nor the field set is enforced here; callers
    /// that need it use [`TabularStore::check_conforms`] first. A mismatch
    /// is logged.
    pub fn insert(&mut self, record: Record) {
        if !self.records.is_empty() || !self.header.is_empty() {
            let columns = self.columns();
            let same_fields = record.len() == columns.len() && columns.iter().all(|c| record.contains(c));
            if !same_fields {
                warn!(table = %self.name, "Inserted record does not match the table columns");
            }
        }
        self.records.push(record);
        self.dirty = true;
        debug!(table = %self.name, records = self.records.len(), "Record inserted");
    }

    /// Removes the first record structurally equal to `record`.
    ///
    /// Returns false, and changes nothing, when no record matches.
    pub fn remove(&mut self, record: &Record) -> bool {
        match self.records.iter().position(|r| r == record) {
            Some(index) => {
                self.records.remove(index);
                self.dirty = true;
                debug!(table = %self.name, index, "Record removed");
                true
            }
            None => false,
        }
    }

    /// Returns true while a mutation is waiting to be persisted.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// File name of `path`, used as the table label.
fn table_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use hotel_core::FieldMatch;

    const GUESTS: &str = "guest_id,first_name,last_name,check_in_date,check_out_date\n\
G-1,Maria,Lopez,2024-05-28,2024-06-02\n\
G-2,Mario,Rossi,2024-05-30,2024-06-01\n\
G-3,Anna,Lopez,2024-05-30,2024-06-04\n";

    fn guests() -> TabularStore {
        TabularStore::load("Guest.csv", GUESTS.as_bytes()).unwrap()
    }

    #[test]
    fn test_round_trip_unchanged() {
        let mut store = guests();
        let mut out = Vec::new();
        store.persist(&mut out).unwrap();

        let reloaded = TabularStore::load("Guest.csv", out.as_slice()).unwrap();
        assert_eq!(reloaded.records(), store.records());
        assert_eq!(reloaded.columns(), store.columns());
        assert_eq!(String::from_utf8(out).unwrap(), GUESTS);
    }

    #[test]
    fn test_find_all_keeps_order_and_state() {
        let store = guests();
        let before = store.records().to_vec();

        let hits = store.find_all(&FieldMatch::ignore_case("last_name", "LOPEZ"));
        let ids: Vec<_> = hits.iter().map(|r| r.get("guest_id").unwrap()).collect();
        assert_eq!(ids, vec!["G-1", "G-3"]);

        assert!(store.find_all(&FieldMatch::exact("guest_id", "G-9")).is_empty());
        assert_eq!(store.records(), before.as_slice());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_find_unique_first_match_wins() {
        let store = guests();
        let hit = store
            .find_unique(&FieldMatch::exact("check_in_date", "2024-05-30"))
            .unwrap();
        assert_eq!(hit.get("guest_id"), Some("G-2"));
        assert!(store.find_unique(&FieldMatch::exact("guest_id", "nope")).is_none());
    }

    #[test]
    fn test_field_values() {
        let store = guests();
        let values = store.field_values("last_name").unwrap();
        assert_eq!(values.into_iter().collect::<Vec<_>>(), vec!["Lopez", "Rossi"]);

        let err = store.field_values("Company Type").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn test_update_unknown_field_leaves_store_unchanged() {
        let mut store = guests();
        let before = store.records().to_vec();

        let err = store
            .update(0, &[("check_out_date", "2024-06-09"), ("room", "12")])
            .unwrap_err();

        assert!(matches!(err, StoreError::Schema { ref field, .. } if field == "room"));
        assert_eq!(store.records(), before.as_slice());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_update_marks_dirty_until_persist() {
        let mut store = guests();
        store.update(1, &[("check_out_date", "2024-06-03")]).unwrap();
        assert_eq!(store.get(1).unwrap().get("check_out_date"), Some("2024-06-03"));
        assert!(store.is_dirty());

        store.persist(Vec::new()).unwrap();
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_update_out_of_range() {
        let mut store = guests();
        let err = store.update(10, &[("first_name", "X")]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = guests();
        let stranger = Record::from_pairs([("guest_id", "G-9")]);
        assert!(!store.remove(&stranger));
        assert_eq!(store.len(), 3);
        assert!(!store.is_dirty());

        let second = store.get(1).unwrap().clone();
        assert!(store.remove(&second));
        assert_eq!(store.len(), 2);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_insert_and_write_back_order() {
        let mut store = TabularStore::load("b.csv", "room_id,first_name\n".as_bytes()).unwrap();
        assert_eq!(store.columns(), vec!["room_id", "first_name"]);

        store.insert(Record::from_pairs([("room_id", ""), ("first_name", "Ada")]));
        let mut out = Vec::new();
        store.persist(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "room_id,first_name\n,Ada\n");
    }

    #[test]
    fn test_header_only_table() {
        let store = TabularStore::load("Guest.csv", "guest_id,first_name\n".as_bytes()).unwrap();
        assert!(store.find_all(&FieldMatch::contains("first_name", "")).is_empty());
        assert!(store.field_values("first_name").unwrap().is_empty());
        assert!(store.require_columns(&["guest_id"]).is_ok());
    }

    #[test]
    fn test_require_columns_reports_available() {
        let store = guests();
        match store.require_columns(&["guest_id", "Company Name"]).unwrap_err() {
            StoreError::MissingColumn { missing, available, .. } => {
                assert_eq!(missing, "Company Name");
                assert_eq!(available.len(), 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_check_conforms() {
        let store = guests();
        assert!(store.check_conforms(&Record::from_pairs([("guest_id", "G-4")])).is_ok());
        let err = store
            .check_conforms(&Record::from_pairs([("guest_id", "G-4"), ("vip", "yes")]))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn test_path_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Guest.csv");
        std::fs::write(&path, GUESTS).unwrap();

        let mut store = TabularStore::load_from_path(&path).unwrap();
        assert_eq!(store.name(), "Guest.csv");
        store.update(0, &[("check_out_date", "2024-06-05")]).unwrap();
        store.persist_to_path(&path).unwrap();

        let reloaded = TabularStore::load_from_path(&path).unwrap();
        assert_eq!(reloaded.get(0).unwrap().get("check_out_date"), Some("2024-06-05"));
        assert_eq!(reloaded.len(), 3);
    }

    #[test]
    fn test_schema_failure_leaves_file_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        std::fs::write(&path, "A,B\n1,2\n").unwrap();

        let mut store = TabularStore::load_from_path(&path).unwrap();
        store.insert(Record::from_pairs([("A", "3"), ("B", "4"), ("C", "5")]));
        let err = store.persist_to_path(&path).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Schema);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "A,B\n1,2\n");
        assert!(store.is_dirty());
    }

    #[test]
    fn test_emptied_table_keeps_load_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Guest.csv");
        std::fs::write(&path, GUESTS).unwrap();

        let mut store = TabularStore::load_from_path(&path).unwrap();
        while let Some(first) = store.get(0).cloned() {
            assert!(store.remove(&first));
        }
        store.persist_to_path(&path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "guest_id,first_name,last_name,check_in_date,check_out_date\n"
        );
        let reloaded = TabularStore::load_from_path(&path).unwrap();
        assert!(reloaded.is_empty());
        assert_eq!(reloaded.columns().len(), 5);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TabularStore::load_from_path(dir.path().join("absent.csv")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
