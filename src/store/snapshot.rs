//! Collection snapshots returned by store operations

use serde::Serialize;

use crate::record::StudentRecord;

/// Immutable copy of the collection at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    records: Vec<StudentRecord>,
}

impl Snapshot {
    /// Creates a snapshot from records in order
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    /// Returns true if the snapshot holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns the records in order
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Returns an iterator over the records
    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    /// Returns the ids in order
    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(StudentRecord::id).collect()
    }

    /// Returns true if a record with the id is present
    pub fn contains_id(&self, id: &str) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    /// Consumes the snapshot, returning its records
    pub fn into_records(self) -> Vec<StudentRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::sample_records;

    #[test]
    fn test_snapshot_accessors() {
        let snapshot = Snapshot::new(sample_records());
        assert_eq!(snapshot.len(), 3);
        assert!(!snapshot.is_empty());
        assert_eq!(snapshot.ids(), vec!["1001", "1002", "1003"]);
        assert!(snapshot.contains_id("1002"));
        assert!(!snapshot.contains_id("9999"));
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }

    #[test]
    fn test_snapshot_serializes_as_array() {
        let json = serde_json::to_value(Snapshot::new(sample_records())).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], "1001");
        assert_eq!(json[0]["semester"], 4);
    }
}
