use crate::db::sheet::{FIRST_DATA_ROW, Worksheet};
use crate::errors::AppResult;
use crate::models::{SheetRecord, SheetRow};

/// Fresh read of one sheet, taken at the start of an interaction.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub rows: Vec<SheetRow<T>>,
}

impl<T: SheetRecord + Clone> Snapshot<T> {
    pub fn fetch<W: Worksheet>(sheet: &mut W) -> AppResult<Self> {
        let rows = sheet
            .get_all_rows()?
            .into_iter()
            .map(SheetRow::parse)
            .collect();
        Ok(Self { rows })
    }

    /// Valid records in store order.
    pub fn records(&self) -> Vec<T> {
        self.rows.iter().filter_map(|r| r.valid().cloned()).collect()
    }

    /// `(sheet row, reason)` for every row rejected at load time.
    pub fn quarantined(&self) -> Vec<(usize, &str)> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(idx, row)| match row {
                SheetRow::Quarantined { reason, .. } => Some((idx + FIRST_DATA_ROW, reason.as_str())),
                SheetRow::Valid(_) => None,
            })
            .collect()
    }

    /// Mirror a row just appended to the sheet, so the snapshot keeps
    /// matching the store without a second read.
    pub fn push(&mut self, record: T) {
        self.rows.push(SheetRow::Valid(record));
    }

    pub fn record_at(&self, position: usize) -> Option<&T> {
        position
            .checked_sub(FIRST_DATA_ROW)
            .and_then(|idx| self.rows.get(idx))
            .and_then(SheetRow::valid)
    }
}
