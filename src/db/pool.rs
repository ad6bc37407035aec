//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::sheet::SqliteSheet;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags, OptionalExtension, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file. Used by `init`.
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open an already initialized store.
    ///
    /// A missing file, an unreadable file or a database without the sheet
    /// tables all map to a single `Connection` error.
    pub fn open_existing(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if path.trim().is_empty() || !p.exists() {
            return Err(AppError::Connection(format!(
                "database '{}' not found, run `catlog init` first",
                path
            )));
        }

        let conn = Connection::open_with_flags(
            p,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| AppError::Connection(format!("{}: {}", path, e)))?;

        let initialized: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type='table' AND name='sheet_rows'",
                [],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| AppError::Connection(format!("{}: {}", path, e)))?;

        if initialized.is_none() {
            return Err(AppError::Connection(format!(
                "database '{}' is not initialized, run `catlog init` first",
                path
            )));
        }

        Ok(Self { conn })
    }

    /// Fresh, fully migrated in-memory store.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        crate::db::initialize::init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn care_sheet(&self) -> SqliteSheet<'_> {
        SqliteSheet::care_log(&self.conn)
    }

    pub fn medical_sheet(&self) -> SqliteSheet<'_> {
        SqliteSheet::medical(&self.conn)
    }
}
