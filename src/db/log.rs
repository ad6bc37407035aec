//! Internal audit trail, one row per mutation in the `log` table.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, params};

/// Operations recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOp {
    Init,
    Add,
    Edit,
    Del,
    MedicalAdd,
    MedicalEdit,
    MedicalDel,
    Export,
    MigrationApplied,
}

impl AuditOp {
    pub const ALL: [AuditOp; 9] = [
        AuditOp::Init,
        AuditOp::Add,
        AuditOp::Edit,
        AuditOp::Del,
        AuditOp::MedicalAdd,
        AuditOp::MedicalEdit,
        AuditOp::MedicalDel,
        AuditOp::Export,
        AuditOp::MigrationApplied,
    ];

    /// Value stored in `log.operation`.
    pub fn as_str(self) -> &'static str {
        match self {
            AuditOp::Init => "init",
            AuditOp::Add => "add",
            AuditOp::Edit => "edit",
            AuditOp::Del => "del",
            AuditOp::MedicalAdd => "medical_add",
            AuditOp::MedicalEdit => "medical_edit",
            AuditOp::MedicalDel => "medical_del",
            AuditOp::Export => "export",
            AuditOp::MigrationApplied => "migration_applied",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == s)
    }
}

pub fn ttlog(conn: &Connection, op: AuditOp, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![
        Local::now().to_rfc3339(),
        op.as_str(),
        target.trim(),
        message
    ])?;

    Ok(())
}

/// The audit trail never blocks a command: failures only warn.
pub fn ttlog_quiet(conn: &Connection, op: AuditOp, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, op, target, message) {
        warning(format!("Failed to write internal log ({}): {}", op.as_str(), e));
    }
}
