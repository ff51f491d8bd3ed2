//! Presentation state for studentdb
//!
//! Holds what belongs to the user interface rather than to the data:
//! - which direction each column was last sorted in
//! - which record is awaiting delete confirmation
//! - how a collection looks as a text table

mod pending_delete;
mod sort_toggle;
mod table;

pub use pending_delete::PendingDelete;
pub use sort_toggle::SortToggle;
pub use table::{render_table, NO_RECORDS};
