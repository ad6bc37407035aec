//! Spreadsheet-like row store.
//!
//! A worksheet is an ordered list of rows with a header at row 1 and
//! 1-based addressing, the same contract a hosted spreadsheet offers:
//! append a row, read every row, overwrite cells of one row, delete one row.
//! There is no primary key visible to callers, only positions.

use crate::errors::{AppError, AppResult};
use crate::models::{CareEvent, MedicalRecord, SheetRecord};
use rusqlite::{Connection, OptionalExtension, params};

pub const HEADER_ROW: usize = 1;
pub const FIRST_DATA_ROW: usize = 2;

pub const CARE_SHEET: &str = "care_log";
pub const MEDICAL_SHEET: &str = "medical";

pub trait Worksheet {
    fn name(&self) -> &str;

    fn header(&self) -> &[&'static str];

    fn append_row(&mut self, cells: &[String]) -> AppResult<()>;

    /// Every data row in store order (the header is not included).
    fn get_all_rows(&mut self) -> AppResult<Vec<Vec<String>>>;

    /// Overwrite consecutive cells of one row starting at `first_col`, in a
    /// single write. `row` and `first_col` are 1-based; row 1 is the header.
    fn update_row(&mut self, row: usize, first_col: usize, values: &[String]) -> AppResult<()>;

    fn update_cell(&mut self, row: usize, col: usize, value: &str) -> AppResult<()> {
        self.update_row(row, col, &[value.to_string()])
    }

    fn delete_row(&mut self, row: usize) -> AppResult<()>;
}

pub struct SqliteSheet<'c> {
    conn: &'c Connection,
    name: &'static str,
    header: &'static [&'static str],
}

impl<'c> SqliteSheet<'c> {
    pub fn new(conn: &'c Connection, name: &'static str, header: &'static [&'static str]) -> Self {
        Self { conn, name, header }
    }

    pub fn care_log(conn: &'c Connection) -> Self {
        Self::new(conn, CARE_SHEET, CareEvent::HEADER)
    }

    pub fn medical(conn: &'c Connection) -> Self {
        Self::new(conn, MEDICAL_SHEET, MedicalRecord::HEADER)
    }

    /// Resolve a sheet position to the backing row key.
    fn row_key(&self, row: usize) -> AppResult<i64> {
        if row < FIRST_DATA_ROW {
            return Err(AppError::InvalidRowPosition(row));
        }

        let offset = (row - FIRST_DATA_ROW) as i64;
        let key: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM sheet_rows WHERE sheet = ?1 ORDER BY id ASC LIMIT 1 OFFSET ?2",
                params![self.name, offset],
                |r| r.get(0),
            )
            .optional()?;

        key.ok_or(AppError::InvalidRowPosition(row))
    }
}

impl Worksheet for SqliteSheet<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn header(&self) -> &[&'static str] {
        self.header
    }

    fn append_row(&mut self, cells: &[String]) -> AppResult<()> {
        let encoded = serde_json::to_string(cells)?;
        self.conn.execute(
            "INSERT INTO sheet_rows (sheet, cells) VALUES (?1, ?2)",
            params![self.name, encoded],
        )?;
        Ok(())
    }

    fn get_all_rows(&mut self) -> AppResult<Vec<Vec<String>>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT cells FROM sheet_rows WHERE sheet = ?1 ORDER BY id ASC")?;

        let rows = stmt.query_map([self.name], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            let raw = r?;
            out.push(serde_json::from_str::<Vec<String>>(&raw)?);
        }
        Ok(out)
    }

    fn update_row(&mut self, row: usize, first_col: usize, values: &[String]) -> AppResult<()> {
        if first_col == 0 {
            return Err(AppError::InvalidColumn(0));
        }
        let last_col = first_col + values.len().saturating_sub(1);
        if last_col > self.header.len() {
            return Err(AppError::InvalidColumn(last_col));
        }

        let key = self.row_key(row)?;
        if values.is_empty() {
            return Ok(());
        }

        let raw: String =
            self.conn
                .query_row("SELECT cells FROM sheet_rows WHERE id = ?1", [key], |r| {
                    r.get(0)
                })?;

        let mut cells: Vec<String> = serde_json::from_str(&raw)?;
        if cells.len() < last_col {
            cells.resize(last_col, String::new());
        }
        cells[first_col - 1..last_col].clone_from_slice(values);

        self.conn.execute(
            "UPDATE sheet_rows SET cells = ?1 WHERE id = ?2",
            params![serde_json::to_string(&cells)?, key],
        )?;
        Ok(())
    }

    fn delete_row(&mut self, row: usize) -> AppResult<()> {
        let key = self.row_key(row)?;
        self.conn
            .execute("DELETE FROM sheet_rows WHERE id = ?1", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;

    fn row(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn positions_start_after_the_header() {
        let pool = DbPool::in_memory().unwrap();
        let mut sheet = pool.care_sheet();
        sheet.append_row(&row(&["A", "2024-01-01", "09:00", "Feeding", "1", ""])).unwrap();
        sheet.append_row(&row(&["B", "2024-01-01", "10:00", "Feeding", "2", ""])).unwrap();

        sheet.update_cell(3, 5, "2.5").unwrap();
        let rows = sheet.get_all_rows().unwrap();
        assert_eq!(rows[1][4], "2.5");
        assert_eq!(rows[0][4], "1");

        assert!(matches!(
            sheet.update_cell(HEADER_ROW, 5, "x"),
            Err(AppError::InvalidRowPosition(1))
        ));
        assert!(matches!(
            sheet.delete_row(4),
            Err(AppError::InvalidRowPosition(4))
        ));
    }

    #[test]
    fn delete_shifts_following_rows() {
        let pool = DbPool::in_memory().unwrap();
        let mut sheet = pool.care_sheet();
        for name in ["A", "B", "C"] {
            sheet.append_row(&row(&[name, "2024-01-01", "09:00", "Litter", "ok", ""])).unwrap();
        }

        sheet.delete_row(3).unwrap();
        let names: Vec<String> = sheet
            .get_all_rows()
            .unwrap()
            .into_iter()
            .map(|r| r[0].clone())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn update_pads_short_legacy_rows() {
        let pool = DbPool::in_memory().unwrap();
        let mut sheet = pool.care_sheet();
        sheet.append_row(&row(&["A", "2024-01-01", "09:00", "Litter", "ok"])).unwrap();

        sheet.update_cell(2, 6, "soft").unwrap();
        assert_eq!(sheet.get_all_rows().unwrap()[0].len(), 6);
        assert!(matches!(sheet.update_cell(2, 9, "x"), Err(AppError::InvalidColumn(9))));
    }

    #[test]
    fn update_row_rewrites_a_span_in_one_go() {
        let pool = DbPool::in_memory().unwrap();
        let mut sheet = pool.medical_sheet();
        sheet
            .append_row(&row(&["Mimi", "2024-01-01", "Checkup", "4", "A", "old", "", "id-1"]))
            .unwrap();

        sheet
            .update_row(2, 2, &row(&["2024-02-02", "Vaccine", "4", "A", "new", ""]))
            .unwrap();
        assert_eq!(
            sheet.get_all_rows().unwrap()[0],
            row(&["Mimi", "2024-02-02", "Vaccine", "4", "A", "new", "", "id-1"])
        );

        // a span running past the header is refused before anything is written
        assert!(matches!(
            sheet.update_row(2, 7, &row(&["x", "y", "z"])),
            Err(AppError::InvalidColumn(9))
        ));
        assert_eq!(sheet.get_all_rows().unwrap()[0][6], "");
    }

    #[test]
    fn sheets_are_independent() {
        let pool = DbPool::in_memory().unwrap();
        pool.care_sheet()
            .append_row(&row(&["A", "2024-01-01", "09:00", "Litter", "ok", ""]))
            .unwrap();
        assert!(pool.medical_sheet().get_all_rows().unwrap().is_empty());
    }
}
