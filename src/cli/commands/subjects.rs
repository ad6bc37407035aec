use crate::cli::commands::{cached, report_quarantined};
use crate::config::Config;
use crate::core::filter::subjects;
use crate::core::snapshot::Snapshot;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::CareEvent;
use crate::ui::messages::info;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open_existing(&cfg.database)?;
    let mut sheet = cached(pool.care_sheet(), cfg);

    let snapshot: Snapshot<CareEvent> = Snapshot::fetch(&mut sheet)?;
    report_quarantined(&snapshot);

    let names = subjects(&snapshot.records());
    if names.is_empty() {
        info("No cats recorded yet.");
        return Ok(());
    }

    for name in names {
        println!("🐱 {}", name);
    }
    Ok(())
}
