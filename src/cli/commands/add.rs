use crate::cli::commands::{cached, parse_category, report_quarantined};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, NewCareEvent};
use crate::core::filter::select_and_sort;
use crate::core::snapshot::Snapshot;
use crate::core::summary::{parse_quantity, summarize_with_ratio};
use crate::db::log::{AuditOp, ttlog_quiet};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{CareEvent, Category};
use crate::ui::messages::{success, warning};
use crate::ui::render::print_summary;
use crate::utils::date::{parse_optional_date, parse_optional_time};

/// Save one care event, then show the summary of its day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        subject,
        category,
        content,
        date,
        time,
        note,
    } = cmd
    {
        let category = parse_category(category)?;
        let input = NewCareEvent {
            subject: subject.clone(),
            date: parse_optional_date(date.as_ref())?,
            time: parse_optional_time(time.as_ref())?,
            category,
            content: content.clone(),
            note: note.clone(),
        };

        let pool = DbPool::open_existing(&cfg.database)?;
        let mut sheet = cached(pool.care_sheet(), cfg);

        // one read serves the whole command: the new row is mirrored into it
        let mut snapshot: Snapshot<CareEvent> = Snapshot::fetch(&mut sheet)?;
        let event = AddLogic::add_event(&mut sheet, input)?;
        snapshot.push(event.clone());

        ttlog_quiet(
            &pool.conn,
            AuditOp::Add,
            &event.subject,
            &format!("{} {} {}", event.date, event.category, event.describe()),
        );
        success(format!(
            "Saved {} for {} on {} at {}",
            event.category, event.subject, event.date, event.time
        ));

        if category == Category::Feeding && parse_quantity(&event.content).is_none() {
            warning(format!(
                "'{}' is not a number of spoons ({}): it is listed but not counted in totals",
                event.content,
                category.content_hint()
            ));
        }

        report_quarantined(&snapshot);
        let events = select_and_sort(&snapshot.records(), &event.subject);
        print_summary(
            &event.subject,
            &summarize_with_ratio(&events, &event.date, cfg.spoon_to_gram),
        );
    }

    Ok(())
}
