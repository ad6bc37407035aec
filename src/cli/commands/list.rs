use crate::cli::commands::{cached, parse_category, report_quarantined, resolve_subject};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{by_category, select_and_sort};
use crate::core::snapshot::Snapshot;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::CareEvent;
use crate::ui::messages::{header, info};
use crate::ui::render::print_events;

/// Full history of one subject, most recent first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        subject,
        category,
        ids,
    } = cmd
    {
        let subject = resolve_subject(subject.as_ref(), cfg)?;
        let category = category.as_deref().map(parse_category).transpose()?;

        let pool = DbPool::open_existing(&cfg.database)?;
        let mut sheet = cached(pool.care_sheet(), cfg);

        let snapshot: Snapshot<CareEvent> = Snapshot::fetch(&mut sheet)?;
        report_quarantined(&snapshot);

        let mut events = select_and_sort(&snapshot.records(), &subject);
        if let Some(c) = category {
            events = by_category(&events, c);
        }

        if events.is_empty() {
            info(format!("No records for {}.", subject));
            return Ok(());
        }

        header("📜", format!("History of {} ({} records)", subject, events.len()));
        print_events(&events, *ids);
    }

    Ok(())
}
