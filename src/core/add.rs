use crate::db::sheet::Worksheet;
use crate::errors::{AppError, AppResult};
use crate::models::{CareEvent, Category, MedicalRecord, SheetRecord};
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

/// Values collected from the entry form / command line.
#[derive(Debug, Clone)]
pub struct NewCareEvent {
    pub subject: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub category: Category,
    pub content: String,
    pub note: String,
}

/// Full-width decimal points typed on phone keyboards become ASCII dots.
pub fn normalize_content(raw: &str) -> String {
    raw.trim().replace(['。', '．'], ".")
}

pub(crate) fn require_subject(subject: &str) -> AppResult<String> {
    let s = subject.trim();
    if s.is_empty() {
        return Err(AppError::EmptySubject);
    }
    Ok(s.to_string())
}

pub(crate) fn require_content(raw: &str) -> AppResult<String> {
    let content = normalize_content(raw);
    if content.is_empty() {
        return Err(AppError::EmptyContent);
    }
    Ok(content)
}

pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

pub struct AddLogic;

impl AddLogic {
    /// Validate and append one care event. Nothing is written on validation failure.
    pub fn add_event<W: Worksheet>(sheet: &mut W, input: NewCareEvent) -> AppResult<CareEvent> {
        let subject = require_subject(&input.subject)?;
        let content = require_content(&input.content)?;

        let event = CareEvent::new(
            &subject,
            input.date,
            input.time,
            input.category,
            &content,
            input.note.trim(),
        )
        .with_id(new_record_id());

        sheet.append_row(&event.to_cells())?;
        Ok(event)
    }

    pub fn add_medical<W: Worksheet>(sheet: &mut W, record: MedicalRecord) -> AppResult<MedicalRecord> {
        let subject = require_subject(&record.subject)?;

        let record = MedicalRecord {
            subject,
            id: Some(new_record_id()),
            ..record
        };

        sheet.append_row(&record.to_cells())?;
        Ok(record)
    }
}
