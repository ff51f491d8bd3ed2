//! The record store
//!
//! Owns the authoritative collection. Every mutation is all-or-nothing:
//! a failed add, update or delete leaves the collection untouched.
//!
//! Invariants held between calls:
//! - every record satisfies the field rules
//! - no two records share an id
//! - records stay in insertion order until `sort_by` is called

use super::errors::{StoreError, StoreResult};
use super::search::SearchView;
use super::snapshot::Snapshot;
use super::sorter::{RecordSorter, SortSpec};
use super::target::RecordTarget;
use crate::record::{RawRecord, RecordSource, StudentRecord};
use crate::validation::Validator;

/// In-memory student record store.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
    validator: Validator,
}

impl RecordStore {
    /// Creates an empty store using the given validator
    pub fn new(validator: Validator) -> Self {
        Self {
            records: Vec::new(),
            validator,
        }
    }

    /// Creates a store populated from a record source.
    ///
    /// Loaded records must pass the field format rules and have unique
    /// ids. The course offerings of `validator` only gate later adds and
    /// updates, so records already on file load even when their course is
    /// no longer offered.
    pub fn open(validator: Validator, source: &mut dyn RecordSource) -> StoreResult<Self> {
        let mut store = Self::new(Validator::new());
        for record in source.load()? {
            store.add(&record.to_raw())?;
        }
        store.validator = validator;
        Ok(store)
    }

    /// Hands the current collection to a record source
    pub fn persist(&self, source: &mut dyn RecordSource) -> StoreResult<()> {
        source.save(&self.records)?;
        Ok(())
    }

    /// Returns the validator gating mutations
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records in current order
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Copies the current collection
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.records.clone())
    }

    /// Looks up a record by id
    pub fn get_by_id(&self, id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Returns the current position of a record id
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    /// Resolves a target to a position, if it exists
    fn resolve(&self, target: &RecordTarget) -> Option<usize> {
        match target {
            RecordTarget::Position(position) if *position < self.records.len() => Some(*position),
            RecordTarget::Position(_) => None,
            RecordTarget::Id(id) => self.position_of(id.trim()),
        }
    }

    fn require(&self, target: &RecordTarget) -> StoreResult<usize> {
        self.resolve(target)
            .ok_or_else(|| StoreError::NotFound(target.clone()))
    }

    /// Validates and appends a new record.
    ///
    /// # Errors
    ///
    /// - `Validation` if any field rule fails
    /// - `DuplicateId` if the id is already in use
    pub fn add(&mut self, candidate: &RawRecord) -> StoreResult<Snapshot> {
        let record = self.validator.check(candidate)?;

        if self.position_of(&record.id).is_some() {
            return Err(StoreError::DuplicateId(record.id));
        }

        self.records.push(record);
        Ok(self.snapshot())
    }

    /// Validates and replaces a record in place.
    ///
    /// The id may change as long as no other record holds the new one.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the target does not exist
    /// - `Validation` if any field rule fails
    /// - `DuplicateId` if the new id belongs to a different record
    pub fn update(&mut self, target: &RecordTarget, candidate: &RawRecord) -> StoreResult<Snapshot> {
        let position = self.require(target)?;
        let record = self.validator.check(candidate)?;

        let collides = self
            .records
            .iter()
            .enumerate()
            .any(|(i, existing)| i != position && existing.id == record.id);
        if collides {
            return Err(StoreError::DuplicateId(record.id));
        }

        self.records[position] = record;
        Ok(self.snapshot())
    }

    /// Returns the record at the target without changing anything.
    ///
    /// First half of the confirm-then-delete flow.
    pub fn preview(&self, target: &RecordTarget) -> StoreResult<&StudentRecord> {
        let position = self.require(target)?;
        Ok(&self.records[position])
    }

    /// Removes the record at the target, shifting later records down.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the target does not exist
    pub fn delete(&mut self, target: &RecordTarget) -> StoreResult<Snapshot> {
        self.remove(target)?;
        Ok(self.snapshot())
    }

    /// Removes the record at the target and returns it
    pub fn remove(&mut self, target: &RecordTarget) -> StoreResult<StudentRecord> {
        let position = self.require(target)?;
        Ok(self.records.remove(position))
    }

    /// Returns a lazily filtered view of records matching `term`
    pub fn search(&self, term: &str) -> SearchView<'_> {
        SearchView::new(&self.records, term)
    }

    /// Reorders the collection by a column and returns the result
    pub fn sort_by(&mut self, spec: SortSpec) -> Snapshot {
        RecordSorter::sort(&mut self.records, &spec);
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Field, SeededSource, SourceError, SourceResult};
    use crate::store::SortDirection;

    fn seeded() -> RecordStore {
        RecordStore::open(Validator::new(), &mut SeededSource::new()).unwrap()
    }

    fn neha() -> RawRecord {
        RawRecord::new(
            "1004",
            "Neha Sharma",
            "neha.sharma@email.com",
            "9123456780",
            "BCA",
            "2",
            "3.9",
        )
    }

    #[test]
    fn test_open_loads_samples() {
        let store = seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(store.snapshot().ids(), vec!["1001", "1002", "1003"]);
    }

    #[test]
    fn test_add_appends() {
        let mut store = seeded();
        let snapshot = store.add(&neha()).unwrap();
        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot.ids().last(), Some(&"1004"));
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut store = seeded();
        let before = store.snapshot();
        let err = store.add(&neha().with(Field::Id, "1002")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(ref id) if id == "1002"));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_add_invalid_rejected() {
        let mut store = seeded();
        let err = store.add(&neha().with(Field::Phone, "123")).unwrap_err();
        assert_eq!(err.report().unwrap().violated_fields(), vec![Field::Phone]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_in_place() {
        let mut store = seeded();
        let candidate = store.get_by_id("1002").unwrap().to_raw().with(Field::Gpa, "4.0");
        let snapshot = store.update(&RecordTarget::id("1002"), &candidate).unwrap();

        assert_eq!(snapshot.ids(), vec!["1001", "1002", "1003"]);
        assert_eq!(snapshot.records()[1].gpa, 4.0);
    }

    #[test]
    fn test_update_may_keep_own_id() {
        let mut store = seeded();
        let candidate = store.records()[0].to_raw().with(Field::Name, "Rahul K");
        assert!(store.update(&RecordTarget::position(0), &candidate).is_ok());
    }

    #[test]
    fn test_update_may_change_id() {
        let mut store = seeded();
        let candidate = store.records()[0].to_raw().with(Field::Id, "2001");
        let snapshot = store.update(&RecordTarget::position(0), &candidate).unwrap();
        assert_eq!(snapshot.ids(), vec!["2001", "1002", "1003"]);
    }

    #[test]
    fn test_update_id_collision_rejected() {
        let mut store = seeded();
        let candidate = store.records()[0].to_raw().with(Field::Id, "1003");
        let err = store.update(&RecordTarget::position(0), &candidate).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(_)));
        assert_eq!(store.records()[0].id, "1001");
    }

    #[test]
    fn test_update_missing_target() {
        let mut store = seeded();
        let before = store.snapshot();
        let err = store.update(&RecordTarget::position(7), &neha()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_delete_shifts_down() {
        let mut store = seeded();
        let snapshot = store.delete(&RecordTarget::position(0)).unwrap();
        assert_eq!(snapshot.ids(), vec!["1002", "1003"]);
        assert_eq!(store.position_of("1002"), Some(0));
    }

    #[test]
    fn test_delete_twice_not_found() {
        let mut store = seeded();
        store.delete(&RecordTarget::id("1002")).unwrap();
        let err = store.delete(&RecordTarget::id("1002")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_preview_does_not_mutate() {
        let store = seeded();
        let record = store.preview(&RecordTarget::position(2)).unwrap();
        assert_eq!(record.name, "Amit Patel");
        assert_eq!(store.len(), 3);
        assert!(store.preview(&RecordTarget::position(3)).is_err());
    }

    #[test]
    fn test_sort_by_reorders_collection() {
        let mut store = seeded();
        let snapshot = store.sort_by(SortSpec::new(Field::Gpa, SortDirection::Desc));
        assert_eq!(snapshot.ids(), vec!["1002", "1001", "1003"]);
        assert_eq!(store.records()[0].id, "1002");
    }

    #[test]
    fn test_persist_round_trip() {
        let mut source = SeededSource::unseeded();
        let mut store = RecordStore::open(Validator::new(), &mut source).unwrap();
        store.add(&neha()).unwrap();
        store.persist(&mut source).unwrap();

        let reopened = RecordStore::open(Validator::new(), &mut source).unwrap();
        assert_eq!(reopened.snapshot().ids(), vec!["1004"]);
    }

    #[test]
    fn test_open_with_course_offerings_keeps_samples() {
        let mut store =
            RecordStore::open(Validator::with_courses(["BCA"]), &mut SeededSource::new()).unwrap();
        assert_eq!(store.snapshot().ids(), vec!["1001", "1002", "1003"]);
        assert_eq!(store.validator().courses(), ["BCA"]);

        let err = store.add(&neha().with(Field::Course, "B.Tech")).unwrap_err();
        assert_eq!(err.report().unwrap().violated_fields(), vec![Field::Course]);

        let amit = store.records()[2].to_raw().with(Field::Gpa, "3.4");
        assert!(store.update(&RecordTarget::id("1003"), &amit).is_err());
    }

    #[test]
    fn test_id_target_is_trimmed() {
        let mut store = seeded();
        assert_eq!(store.preview(&RecordTarget::id(" 1002 ")).unwrap().name, "Priya Singh");

        let snapshot = store.delete(&RecordTarget::id("1001 ")).unwrap();
        assert_eq!(snapshot.ids(), vec!["1002", "1003"]);
    }

    #[test]
    fn test_open_propagates_source_failure() {
        struct OfflineSource;

        impl RecordSource for OfflineSource {
            fn load(&mut self) -> SourceResult<Vec<StudentRecord>> {
                Err(SourceError::Unavailable("registry offline".into()))
            }

            fn save(&mut self, _records: &[StudentRecord]) -> SourceResult<()> {
                Err(SourceError::Unavailable("registry offline".into()))
            }
        }

        let err = RecordStore::open(Validator::new(), &mut OfflineSource).unwrap_err();
        assert_eq!(err.code(), "STUDENTDB_SOURCE_FAILED");

        let err = seeded().persist(&mut OfflineSource).unwrap_err();
        assert!(matches!(err, StoreError::Source(SourceError::Unavailable(_))));
    }

    #[test]
    fn test_open_rejects_duplicate_source_records() {
        let mut source = SeededSource::unseeded();
        let mut records = crate::record::sample_records();
        records.push(records[0].clone());
        source.save(&records).unwrap();

        let err = RecordStore::open(Validator::new(), &mut source).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(_)));
    }
}
