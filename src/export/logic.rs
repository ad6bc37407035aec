use crate::db::sheet::Worksheet;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, ExportTable};
use crate::ui::messages::warning;
use crate::utils::path::sanitize_file_stem;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub table: ExportTable,
    pub format: ExportFormat,
    /// Only rows whose first column equals this subject.
    pub subject: Option<String>,
    pub path: PathBuf,
    pub force: bool,
}

/// `<subject|all>_<table>_<YYYYMMDD>.<ext>`
pub fn default_file_name(
    table: ExportTable,
    format: ExportFormat,
    subject: Option<&str>,
    date: NaiveDate,
) -> String {
    format!(
        "{}_{}_{}.{}",
        sanitize_file_stem(subject.unwrap_or("all")),
        table.label(),
        date.format("%Y%m%d"),
        format.as_str()
    )
}

/// High level export of one sheet.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the sheet (optionally one subject only) to `req.path`.
    /// Returns the number of exported rows; nothing is written when there are none.
    pub fn export<W: Worksheet>(sheet: &mut W, req: &ExportRequest) -> AppResult<usize> {
        let header: Vec<&str> = sheet.header().to_vec();

        let rows: Vec<Vec<String>> = sheet
            .get_all_rows()?
            .into_iter()
            .filter(|row| match &req.subject {
                Some(s) => row.first().map(|c| c.trim()) == Some(s.as_str()),
                None => true,
            })
            .collect();

        if rows.is_empty() {
            warning("No rows found for the selected sheet/subject.");
            return Ok(0);
        }

        ensure_writable(&req.path, req.force)?;
        write_rows(req.format, &header, &rows, &req.path)?;
        Ok(rows.len())
    }
}

fn write_rows(
    format: ExportFormat,
    header: &[&str],
    rows: &[Vec<String>],
    path: &Path,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(header, rows, path),
        ExportFormat::Json => export_json(header, rows, path),
    }
}
