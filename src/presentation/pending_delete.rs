//! Two-phase delete confirmation
//!
//! `request` previews the record and remembers it, `confirm` deletes it,
//! `cancel` forgets it. The pending record is remembered by id, so a sort
//! between request and confirm still deletes the record that was shown.

use crate::record::StudentRecord;
use crate::store::{RecordStore, RecordTarget, Snapshot, StoreResult};

#[derive(Debug, Clone, Default)]
pub struct PendingDelete {
    pending: Option<StudentRecord>,
}

impl PendingDelete {
    pub fn new() -> Self {
        Self::default()
    }

    /// Previews the target and holds it for confirmation.
    ///
    /// Replaces any earlier pending request.
    pub fn request(
        &mut self,
        store: &RecordStore,
        target: &RecordTarget,
    ) -> StoreResult<&StudentRecord> {
        let record = store.preview(target)?.clone();
        Ok(self.pending.insert(record))
    }

    /// Returns the record awaiting confirmation
    pub fn pending(&self) -> Option<&StudentRecord> {
        self.pending.as_ref()
    }

    /// Deletes the pending record.
    ///
    /// Returns `None` when nothing is pending. The pending state is
    /// cleared whether or not the delete succeeds.
    pub fn confirm(&mut self, store: &mut RecordStore) -> Option<StoreResult<Snapshot>> {
        let record = self.pending.take()?;
        Some(store.delete(&RecordTarget::Id(record.id)))
    }

    /// Drops the pending request, returning what was pending
    pub fn cancel(&mut self) -> Option<StudentRecord> {
        self.pending.take()
    }
}
