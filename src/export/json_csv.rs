use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Byte-order mark written at the start of CSV files so that spreadsheet
/// applications detect UTF-8.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Export CSV: BOM, header row, then the rows as stored.
pub(crate) fn export_csv(header: &[&str], rows: &[Vec<String>], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(UTF8_BOM)?;

    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(padded(row, header.len()))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", rows.len(), path);
    Ok(())
}

/// Export JSON pretty-printed, one object per row keyed by column name.
pub(crate) fn export_json(header: &[&str], rows: &[Vec<String>], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let objects: Vec<Value> = rows
        .iter()
        .map(|row| {
            let map: Map<String, Value> = header
                .iter()
                .zip(padded(row, header.len()))
                .map(|(k, v)| (k.to_string(), Value::String(v)))
                .collect();
            Value::Object(map)
        })
        .collect();

    let json_data = serde_json::to_string_pretty(&objects)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", rows.len(), path);
    Ok(())
}

/// Legacy rows may be shorter than the header; extra cells are dropped.
fn padded(row: &[String], len: usize) -> Vec<String> {
    let mut cells: Vec<String> = row.iter().take(len).cloned().collect();
    cells.resize(len, String::new());
    cells
}
