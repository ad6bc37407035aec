pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod medical;
pub mod stats;
pub mod subjects;
pub mod summary;
pub mod weight;

use crate::cli::parser::{CareTargetArgs, MedicalTargetArgs};
use crate::config::Config;
use crate::core::add::normalize_content;
use crate::core::locate::Target;
use crate::core::snapshot::Snapshot;
use crate::db::cache::CachedSheet;
use crate::db::sheet::Worksheet;
use crate::errors::{AppError, AppResult};
use crate::models::{CareIdentity, Category, MedicalIdentity};
use crate::ui::messages::warning;
use crate::utils::date::{canonical_date, canonical_time};
use std::io::{self, Write};
use std::time::Duration;
use uuid::Uuid;

/// Wrap a sheet in the read cache configured by `cache_ttl_secs`.
pub(crate) fn cached<W: Worksheet>(sheet: W, cfg: &Config) -> CachedSheet<W> {
    CachedSheet::new(sheet, Duration::from_secs(cfg.cache_ttl_secs))
}

/// Subject given on the command line, else `default_subject` from the config.
pub(crate) fn resolve_subject(arg: Option<&String>, cfg: &Config) -> AppResult<String> {
    arg.or(cfg.default_subject.as_ref())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(AppError::EmptySubject)
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// One warning line per row that could not be read.
pub(crate) fn report_quarantined<T>(snapshot: &Snapshot<T>)
where
    T: crate::models::SheetRecord + Clone,
{
    for (row, reason) in snapshot.quarantined() {
        warning(format!("Row {} skipped: {}", row, reason));
    }
}

fn record_id(raw: &str) -> AppResult<String> {
    Uuid::parse_str(raw.trim())
        .map(|u| u.to_string())
        .map_err(|_| AppError::InvalidId(raw.to_string()))
}

pub(crate) fn parse_category(code: &str) -> AppResult<Category> {
    Category::from_code(code).ok_or_else(|| {
        let known: Vec<&str> = Category::ALL.iter().map(Category::to_db_str).collect();
        AppError::InvalidCategory(format!("'{}' (use one of {})", code, known.join(", ")))
    })
}

pub(crate) fn care_target(
    subject: Option<&String>,
    args: &CareTargetArgs,
    cfg: &Config,
) -> AppResult<Target<CareIdentity>> {
    if let Some(id) = &args.id {
        return Ok(Target::Id(record_id(id)?));
    }

    // clap guarantees the fields when --id is absent
    let missing = || AppError::Other("--id or --date/--time/--category/--content required".into());

    Ok(Target::Fields(CareIdentity {
        subject: resolve_subject(subject, cfg)?,
        date: canonical_date(args.date.as_deref().ok_or_else(missing)?)?,
        time: canonical_time(args.time.as_deref().ok_or_else(missing)?)?,
        category: parse_category(args.category.as_deref().ok_or_else(missing)?)?,
        content: normalize_content(args.content.as_deref().ok_or_else(missing)?),
    }))
}

pub(crate) fn medical_target(
    subject: Option<&String>,
    args: &MedicalTargetArgs,
    cfg: &Config,
) -> AppResult<Target<MedicalIdentity>> {
    if let Some(id) = &args.id {
        return Ok(Target::Id(record_id(id)?));
    }

    let date = args
        .date
        .as_deref()
        .ok_or_else(|| AppError::Other("--id or --date required".into()))?;

    Ok(Target::Fields(MedicalIdentity {
        subject: resolve_subject(subject, cfg)?,
        date: canonical_date(date)?,
        category: args.category.trim().to_string(),
        hospital: args.hospital.trim().to_string(),
        weight: args.weight.trim().to_string(),
        details: args.details.trim().to_string(),
        link: args.link.trim().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg_with_default(subject: Option<&str>) -> Config {
        Config {
            default_subject: subject.map(String::from),
            ..Config::default()
        }
    }

    #[test]
    fn subject_falls_back_to_config() {
        let cfg = cfg_with_default(Some("Mimi"));
        assert_eq!(resolve_subject(None, &cfg).unwrap(), "Mimi");
        assert_eq!(
            resolve_subject(Some(&"Coco".to_string()), &cfg).unwrap(),
            "Coco"
        );
        assert!(matches!(
            resolve_subject(None, &cfg_with_default(None)),
            Err(AppError::EmptySubject)
        ));
    }

    #[test]
    fn ids_must_be_uuids() {
        assert!(matches!(record_id("row-3"), Err(AppError::InvalidId(_))));
        let id = Uuid::new_v4().to_string();
        assert_eq!(record_id(&id.to_uppercase()).unwrap(), id);
    }

    #[test]
    fn field_targets_are_canonicalized() {
        let args = CareTargetArgs {
            id: None,
            date: Some("2024-01-01".into()),
            time: Some("0905".into()),
            category: Some("f".into()),
            content: Some(" 0.5 ".into()),
        };
        let target = care_target(Some(&"Mimi".to_string()), &args, &Config::default()).unwrap();
        match target {
            Target::Fields(k) => {
                assert_eq!(k.time, "09:05");
                assert_eq!(k.category, Category::Feeding);
                assert_eq!(k.content, "0.5");
            }
            Target::Id(_) => panic!("expected a field target"),
        }
    }
}
