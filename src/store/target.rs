//! Record addressing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a record either by its current position or by its id.
///
/// Serialized as `{"position": 0}` or `{"id": "1001"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordTarget {
    Position(usize),
    Id(String),
}

impl RecordTarget {
    /// Target by zero-based position
    pub fn position(position: usize) -> Self {
        RecordTarget::Position(position)
    }

    /// Target by identity key
    pub fn id(id: impl Into<String>) -> Self {
        RecordTarget::Id(id.into())
    }
}

impl fmt::Display for RecordTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordTarget::Position(position) => write!(f, "position {}", position),
            RecordTarget::Id(id) => write!(f, "id '{}'", id),
        }
    }
}
