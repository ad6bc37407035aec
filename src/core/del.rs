use crate::core::locate::{Target, locate_target};
use crate::core::snapshot::Snapshot;
use crate::db::sheet::Worksheet;
use crate::errors::{AppError, AppResult};
use crate::models::{Identified, SheetRecord};
use std::fmt::Display;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Locate one record and delete its row.
    ///
    /// Returns the sheet row and the record that was removed. Positions of
    /// every following row shift up by one afterwards.
    pub fn apply<T, W>(sheet: &mut W, target: &Target<T::Key>) -> AppResult<(usize, T)>
    where
        T: SheetRecord + Identified + Clone,
        T::Key: Display,
        W: Worksheet,
    {
        let snapshot: Snapshot<T> = Snapshot::fetch(sheet)?;
        let row = locate_target(&snapshot.rows, target)
            .ok_or_else(|| AppError::RecordNotFound(target.to_string()))?;
        let removed = snapshot
            .record_at(row)
            .cloned()
            .ok_or_else(|| AppError::RecordNotFound(target.to_string()))?;

        sheet.delete_row(row)?;
        Ok((row, removed))
    }
}
