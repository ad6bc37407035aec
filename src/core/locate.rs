//! Finding a record again in a sheet that has no primary key.
//!
//! The scan runs over rows in store order (never over a filtered or sorted
//! view) and the first match wins. The returned position is a sheet row
//! number: index + 2, because row 1 is the header and rows are 1-based.
//! Any insert or delete invalidates previously returned positions.

use crate::models::Identified;
use std::fmt;

pub const ROW_OFFSET: usize = 2;

/// How the caller designates the record to mutate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<K> {
    /// Generated id stored with the row.
    Id(String),
    /// Exact match on every identity field.
    Fields(K),
}

pub fn locate<T: Identified>(rows: &[T], key: &T::Key) -> Option<usize> {
    rows.iter()
        .position(|row| row.matches(key))
        .map(|idx| idx + ROW_OFFSET)
}

pub fn locate_id<T: Identified>(rows: &[T], id: &str) -> Option<usize> {
    rows.iter()
        .position(|row| row.record_id() == Some(id))
        .map(|idx| idx + ROW_OFFSET)
}

pub fn locate_target<T: Identified>(rows: &[T], target: &Target<T::Key>) -> Option<usize> {
    match target {
        Target::Id(id) => locate_id(rows, id),
        Target::Fields(key) => locate(rows, key),
    }
}

impl<K: fmt::Display> fmt::Display for Target<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Id(id) => write!(f, "id {}", id),
            Target::Fields(key) => write!(f, "{}", key),
        }
    }
}
