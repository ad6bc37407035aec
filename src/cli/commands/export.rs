use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::{AuditOp, ttlog_quiet};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest, ExportTable, default_file_name};
use crate::utils::date::today;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        medical,
        subject,
        file,
        dir,
        force,
    } = cmd
    {
        let table = if *medical {
            ExportTable::Medical
        } else {
            ExportTable::CareLog
        };
        let subject = subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        let path = match file {
            Some(f) => expand_tilde(f),
            None => {
                let dir = dir
                    .as_deref()
                    .map(expand_tilde)
                    .unwrap_or_else(|| PathBuf::from("."));
                dir.join(default_file_name(table, *format, subject.as_deref(), today()))
            }
        };

        let req = ExportRequest {
            table,
            format: *format,
            subject,
            path,
            force: *force,
        };

        let pool = DbPool::open_existing(&cfg.database)?;
        let rows = match table {
            ExportTable::CareLog => ExportLogic::export(&mut pool.care_sheet(), &req)?,
            ExportTable::Medical => ExportLogic::export(&mut pool.medical_sheet(), &req)?,
        };

        if rows > 0 {
            ttlog_quiet(
                &pool.conn,
                AuditOp::Export,
                table.label(),
                &format!("{} rows to {}", rows, req.path.display()),
            );
        }
    }

    Ok(())
}
