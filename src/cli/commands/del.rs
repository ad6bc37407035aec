use crate::cli::commands::{ask_confirmation, cached, care_target};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::log::{AuditOp, ttlog_quiet};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::CareEvent;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        subject,
        target,
        yes,
    } = cmd
    {
        let target = care_target(subject.as_ref(), target, cfg)?;

        if !*yes
            && !ask_confirmation(&format!(
                "Delete {}? This action is irreversible.",
                target
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = DbPool::open_existing(&cfg.database)?;
        let mut sheet = cached(pool.care_sheet(), cfg);

        let (row, removed) = DeleteLogic::apply::<CareEvent, _>(&mut sheet, &target)?;

        ttlog_quiet(
            &pool.conn,
            AuditOp::Del,
            &removed.subject,
            &format!(
                "Deleted row {}: {} {} {}",
                row,
                removed.date,
                removed.category,
                removed.describe()
            ),
        );
        success(format!(
            "Deleted {} {} of {} on {}",
            removed.category,
            removed.describe(),
            removed.subject,
            removed.date
        ));
    }

    Ok(())
}
