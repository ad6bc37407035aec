//! Typed view over raw sheet rows.
//!
//! Rows fetched from a worksheet are plain string cells. Each record kind
//! knows how to validate its own cells; rows that fail validation are kept
//! in place as `Quarantined` so that row positions stay aligned with the store.

use crate::models::identity::Identified;

/// A record kind that can be stored as one worksheet row.
pub trait SheetRecord: Sized {
    /// Column titles, in store order. Row 1 of the sheet.
    const HEADER: &'static [&'static str];

    /// Validate raw cells. The error is a short human-readable reason.
    fn from_cells(cells: &[String]) -> Result<Self, String>;

    fn to_cells(&self) -> Vec<String>;
}

#[derive(Debug, Clone)]
pub enum SheetRow<T> {
    Valid(T),
    Quarantined { cells: Vec<String>, reason: String },
}

impl<T: SheetRecord> SheetRow<T> {
    pub fn parse(cells: Vec<String>) -> Self {
        match T::from_cells(&cells) {
            Ok(rec) => SheetRow::Valid(rec),
            Err(reason) => SheetRow::Quarantined { cells, reason },
        }
    }
}

impl<T> SheetRow<T> {
    pub fn valid(&self) -> Option<&T> {
        match self {
            SheetRow::Valid(rec) => Some(rec),
            SheetRow::Quarantined { .. } => None,
        }
    }
}

impl<T: Identified> Identified for SheetRow<T> {
    type Key = T::Key;

    fn matches(&self, key: &Self::Key) -> bool {
        self.valid().is_some_and(|rec| rec.matches(key))
    }

    fn record_id(&self) -> Option<&str> {
        self.valid().and_then(|rec| rec.record_id())
    }
}

/// Cell helper: missing trailing cells read as empty strings.
pub(crate) fn cell(cells: &[String], idx: usize) -> String {
    cells.get(idx).map(|c| c.trim().to_string()).unwrap_or_default()
}
