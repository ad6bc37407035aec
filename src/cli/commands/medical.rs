use crate::cli::commands::{
    ask_confirmation, cached, medical_target, report_quarantined, resolve_subject,
};
use crate::cli::parser::{Commands, MedicalCommand};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::del::DeleteLogic;
use crate::core::edit::{EditLogic, MedicalPatch};
use crate::core::filter::medical_history;
use crate::core::snapshot::Snapshot;
use crate::db::log::{AuditOp, ttlog_quiet};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::MedicalRecord;
use crate::ui::messages::{header, info, success};
use crate::ui::render::medical_table;
use crate::utils::date::{canonical_date, parse_optional_date};

/// Handle `medical add|list|edit|del`
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Medical { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::open_existing(&cfg.database)?;
    let mut sheet = cached(pool.medical_sheet(), cfg);

    match action {
        MedicalCommand::Add {
            subject,
            date,
            category,
            weight,
            hospital,
            details,
            link,
        } => {
            let record = MedicalRecord {
                subject: subject.clone(),
                date: parse_optional_date(date.as_ref())?
                    .format("%Y-%m-%d")
                    .to_string(),
                category: category.trim().to_string(),
                weight: weight.trim().to_string(),
                hospital: hospital.trim().to_string(),
                details: details.trim().to_string(),
                link: link.trim().to_string(),
                id: None,
            };

            let saved = AddLogic::add_medical(&mut sheet, record)?;
            ttlog_quiet(
                &pool.conn,
                AuditOp::MedicalAdd,
                &saved.subject,
                &saved.identity().to_string(),
            );
            success(format!(
                "Saved vet visit for {} on {}",
                saved.subject, saved.date
            ));
        }

        MedicalCommand::List { subject, ids } => {
            let subject = resolve_subject(subject.as_ref(), cfg)?;

            let snapshot: Snapshot<MedicalRecord> = Snapshot::fetch(&mut sheet)?;
            report_quarantined(&snapshot);

            let records = medical_history(&snapshot.records(), &subject);
            if records.is_empty() {
                info(format!("No vet visits for {}.", subject));
                return Ok(());
            }

            header("🏥", format!("Vet visits of {}", subject));
            print!("{}", medical_table(&records, *ids).render());
        }

        MedicalCommand::Edit {
            subject,
            target,
            set_date,
            set_category,
            set_weight,
            set_hospital,
            set_details,
            set_link,
        } => {
            let target = medical_target(subject.as_ref(), target, cfg)?;
            let patch = MedicalPatch {
                date: set_date.as_deref().map(canonical_date).transpose()?,
                category: set_category.clone(),
                weight: set_weight.clone(),
                hospital: set_hospital.clone(),
                details: set_details.clone(),
                link: set_link.clone(),
            };

            let (row, updated) = EditLogic::update_medical(&mut sheet, &target, &patch)?;
            ttlog_quiet(
                &pool.conn,
                AuditOp::MedicalEdit,
                &updated.subject,
                &format!("Updated row {}: {}", row, updated.identity()),
            );
            success(format!("Updated vet visit {} (row {})", updated.identity(), row));
        }

        MedicalCommand::Del {
            subject,
            target,
            yes,
        } => {
            let target = medical_target(subject.as_ref(), target, cfg)?;

            if !*yes
                && !ask_confirmation(&format!(
                    "Delete vet visit {}? This action is irreversible.",
                    target
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let (row, removed) = DeleteLogic::apply::<MedicalRecord, _>(&mut sheet, &target)?;
            ttlog_quiet(
                &pool.conn,
                AuditOp::MedicalDel,
                &removed.subject,
                &format!("Deleted row {}: {}", row, removed.identity()),
            );
            success(format!("Deleted vet visit {}", removed.identity()));
        }
    }

    Ok(())
}
