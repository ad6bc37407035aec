use crate::db::migrate::run_pending_migrations;
use crate::db::sheet::{CARE_SHEET, MEDICAL_SHEET};
use crate::errors::AppResult;
use rusqlite::Connection;

/// Data rows currently held by each sheet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StoreStatus {
    pub care_rows: usize,
    pub medical_rows: usize,
}

/// Bring the schema up to date and report what the store already holds.
/// Safe to run on an existing store: rows are never touched.
pub fn init_db(conn: &Connection) -> AppResult<StoreStatus> {
    run_pending_migrations(conn)?;

    let count = |sheet: &str| -> rusqlite::Result<usize> {
        conn.query_row(
            "SELECT COUNT(*) FROM sheet_rows WHERE sheet = ?1",
            [sheet],
            |r| r.get::<_, i64>(0),
        )
        .map(|n| n as usize)
    };

    Ok(StoreStatus {
        care_rows: count(CARE_SHEET)?,
        medical_rows: count(MEDICAL_SHEET)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use crate::db::sheet::Worksheet;

    #[test]
    fn reinit_keeps_rows() {
        let pool = DbPool::in_memory().unwrap();
        pool.care_sheet()
            .append_row(&["Mimi".to_string(), "2024-01-01".to_string()])
            .unwrap();

        let status = init_db(&pool.conn).unwrap();
        assert_eq!(
            status,
            StoreStatus {
                care_rows: 1,
                medical_rows: 0
            }
        );
    }
}
