use crate::cli::commands::{cached, report_quarantined, resolve_subject};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::select_and_sort;
use crate::core::snapshot::Snapshot;
use crate::core::stats::{daily_totals, trend};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::CareEvent;
use crate::ui::messages::{header, info};
use crate::ui::render::{feeding_table, trend_lines};

/// Per-day feeding totals plus a bar chart of the most recent days.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { subject, days } = cmd {
        let subject = resolve_subject(subject.as_ref(), cfg)?;
        let days = days.unwrap_or(cfg.trend_days);

        let pool = DbPool::open_existing(&cfg.database)?;
        let mut sheet = cached(pool.care_sheet(), cfg);

        let snapshot: Snapshot<CareEvent> = Snapshot::fetch(&mut sheet)?;
        report_quarantined(&snapshot);

        let events = select_and_sort(&snapshot.records(), &subject);
        let totals = daily_totals(&events, cfg.spoon_to_gram);

        if totals.is_empty() {
            info(format!("No feeding records for {}.", subject));
            return Ok(());
        }

        header("🍖", format!("Daily feeding of {}", subject));
        print!("{}", feeding_table(&totals).render());

        header("📈", format!("Last {} days", days));
        for line in trend_lines(&trend(&totals, days)) {
            println!("{}", line);
        }
    }

    Ok(())
}
