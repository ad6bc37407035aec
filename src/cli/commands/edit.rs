use crate::cli::commands::{cached, care_target};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::db::log::{AuditOp, ttlog_quiet};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        subject,
        target,
        set_content,
        set_note,
    } = cmd
    {
        let target = care_target(subject.as_ref(), target, cfg)?;

        let pool = DbPool::open_existing(&cfg.database)?;
        let mut sheet = cached(pool.care_sheet(), cfg);

        let row = EditLogic::update_event(
            &mut sheet,
            &target,
            set_content.as_deref(),
            set_note.as_deref(),
        )?;

        ttlog_quiet(
            &pool.conn,
            AuditOp::Edit,
            &target.to_string(),
            &format!("Updated row {}", row),
        );
        success(format!("Updated {} (row {})", target, row));
    }

    Ok(())
}
