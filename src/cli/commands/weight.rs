use crate::cli::commands::{cached, report_quarantined, resolve_subject};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::select_and_sort;
use crate::core::snapshot::Snapshot;
use crate::core::stats::weight_series;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::CareEvent;
use crate::ui::messages::{header, info};
use crate::ui::render::weight_lines;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Weight { subject } = cmd {
        let subject = resolve_subject(subject.as_ref(), cfg)?;

        let pool = DbPool::open_existing(&cfg.database)?;
        let mut sheet = cached(pool.care_sheet(), cfg);

        let snapshot: Snapshot<CareEvent> = Snapshot::fetch(&mut sheet)?;
        report_quarantined(&snapshot);

        let points = weight_series(&select_and_sort(&snapshot.records(), &subject));
        if points.is_empty() {
            info(format!("No weight records for {}.", subject));
            return Ok(());
        }

        header("⚖️", format!("Weight of {}", subject));
        for line in weight_lines(&points) {
            println!("{}", line);
        }
    }

    Ok(())
}
