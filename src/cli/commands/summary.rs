use crate::cli::commands::{cached, report_quarantined, resolve_subject};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::select_and_sort;
use crate::core::snapshot::Snapshot;
use crate::core::summary::summarize_with_ratio;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::CareEvent;
use crate::ui::render::print_summary;
use crate::utils::date::parse_optional_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { subject, date } = cmd {
        let subject = resolve_subject(subject.as_ref(), cfg)?;
        let day = parse_optional_date(date.as_ref())?
            .format("%Y-%m-%d")
            .to_string();

        let pool = DbPool::open_existing(&cfg.database)?;
        let mut sheet = cached(pool.care_sheet(), cfg);

        let snapshot: Snapshot<CareEvent> = Snapshot::fetch(&mut sheet)?;
        report_quarantined(&snapshot);

        let events = select_and_sort(&snapshot.records(), &subject);
        print_summary(
            &subject,
            &summarize_with_ratio(&events, &day, cfg.spoon_to_gram),
        );
    }

    Ok(())
}
