//! Per-column sort direction toggle
//!
//! Clicking a column header sorts ascending the first time and flips
//! direction on each later click of that same column. This is a UI
//! preference, so it lives here and not in the store.

use std::collections::HashMap;

use crate::record::Field;
use crate::store::{SortDirection, SortSpec};

#[derive(Debug, Clone, Default)]
pub struct SortToggle {
    directions: HashMap<Field, SortDirection>,
}

impl SortToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the direction for `field` and returns the spec to apply.
    pub fn next(&mut self, field: Field) -> SortSpec {
        let direction = match self.directions.get(&field) {
            Some(SortDirection::Asc) => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        self.directions.insert(field, direction);
        SortSpec::new(field, direction)
    }

    /// Pins a column to an explicit direction.
    ///
    /// The following `next` for that column flips from here.
    pub fn set(&mut self, spec: SortSpec) {
        self.directions.insert(spec.field, spec.direction);
    }

    /// Returns the last direction applied to `field`
    pub fn current(&self, field: Field) -> Option<SortDirection> {
        self.directions.get(&field).copied()
    }
}
