mod fs_utils;
mod json_csv;
pub mod logic;

pub use json_csv::UTF8_BOM;
pub use logic::{ExportLogic, ExportRequest, default_file_name};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, rows: usize, path: &Path) {
    success(format!("{label} export completed ({rows} rows): {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Which sheet to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportTable {
    CareLog,
    Medical,
}

impl ExportTable {
    pub fn label(&self) -> &'static str {
        match self {
            ExportTable::CareLog => "care_log",
            ExportTable::Medical => "medical",
        }
    }
}
