use super::category::Category;
use super::identity::Identified;
use super::sheet_row::{SheetRecord, cell};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::fmt;

/// Column positions (1-based) inside the `care_log` sheet.
pub const COL_CONTENT: usize = 5;
pub const COL_NOTE: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareEvent {
    pub subject: String,     // ⇔ subject
    pub date: String,        // ⇔ date     ("YYYY-MM-DD")
    pub time: String,        // ⇔ time     ("HH:MM")
    pub category: Category,  // ⇔ category
    pub content: String,     // ⇔ content  (spoons, kg or free text)
    pub note: String,        // ⇔ note     ('' when absent)
    pub id: Option<String>,  // ⇔ id       (missing on legacy rows)
}

/// Identity fields used to find a care event again in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareIdentity {
    pub subject: String,
    pub date: String,
    pub time: String,
    pub category: Category,
    pub content: String,
}

impl CareEvent {
    pub fn new(
        subject: &str,
        date: NaiveDate,
        time: NaiveTime,
        category: Category,
        content: &str,
        note: &str,
    ) -> Self {
        Self {
            subject: subject.to_string(),
            date: date.format("%Y-%m-%d").to_string(),
            time: time.format("%H:%M").to_string(),
            category,
            content: content.to_string(),
            note: note.to_string(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Combined moment, `None` when date or time are malformed.
    pub fn moment(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()?;
        let time = NaiveTime::parse_from_str(&self.time, "%H:%M").ok()?;
        Some(date.and_time(time))
    }

    pub fn identity(&self) -> CareIdentity {
        CareIdentity {
            subject: self.subject.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            category: self.category,
            content: self.content.clone(),
        }
    }

    /// `"<time> <content>[ (<note>)]"`
    pub fn describe(&self) -> String {
        if self.note.is_empty() {
            format!("{} {}", self.time, self.content)
        } else {
            format!("{} {} ({})", self.time, self.content, self.note)
        }
    }
}

impl fmt::Display for CareIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} '{}'",
            self.subject, self.date, self.time, self.category, self.content
        )
    }
}

impl Identified for CareEvent {
    type Key = CareIdentity;

    fn matches(&self, key: &CareIdentity) -> bool {
        self.subject == key.subject
            && self.date == key.date
            && self.time == key.time
            // legacy labels (Note, 餵食, ...) compare equal to their category
            && self.category == key.category
            && self.content == key.content
    }

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl SheetRecord for CareEvent {
    const HEADER: &'static [&'static str] =
        &["subject", "date", "time", "category", "content", "note", "id"];

    fn from_cells(cells: &[String]) -> Result<Self, String> {
        let subject = cell(cells, 0);
        let date = cell(cells, 1);
        let time = cell(cells, 2);
        let category_raw = cell(cells, 3);

        if subject.is_empty() {
            return Err("missing subject".into());
        }
        if date.is_empty() {
            return Err("missing date".into());
        }
        if time.is_empty() {
            return Err("missing time".into());
        }
        let category = Category::from_db_str(&category_raw)
            .ok_or_else(|| format!("unknown category '{}'", category_raw))?;

        let id = cell(cells, 6);

        Ok(CareEvent {
            subject,
            date,
            time,
            category,
            content: cell(cells, 4),
            note: cell(cells, 5),
            id: if id.is_empty() { None } else { Some(id) },
        })
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.subject.clone(),
            self.date.clone(),
            self.time.clone(),
            self.category.to_db_str().to_string(),
            self.content.clone(),
            self.note.clone(),
            self.id.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sheet_row::SheetRow;

    fn cells(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn legacy_row_without_note_and_id_is_valid() {
        let ev = CareEvent::from_cells(&cells(&["Mimi", "2024-01-01", "09:00", "Note", "sleepy"]))
            .unwrap();
        assert_eq!(ev.category, Category::Other);
        assert_eq!(ev.note, "");
        assert_eq!(ev.id, None);
    }

    #[test]
    fn row_with_unknown_category_is_quarantined() {
        let row: SheetRow<CareEvent> =
            SheetRow::parse(cells(&["Mimi", "2024-01-01", "09:00", "Bath", "x", ""]));
        assert!(matches!(row, SheetRow::Quarantined { ref reason, .. } if reason.contains("Bath")));
    }

    #[test]
    fn row_without_subject_is_rejected() {
        assert!(CareEvent::from_cells(&cells(&["", "2024-01-01", "09:00", "Feeding", "1"])).is_err());
    }

    #[test]
    fn describe_appends_note_only_when_present() {
        let mut ev = CareEvent::from_cells(&cells(&[
            "Mimi", "2024-01-01", "08:30", "Medication", "antibiotic", "",
        ]))
        .unwrap();
        assert_eq!(ev.describe(), "08:30 antibiotic");
        ev.note = "half pill".into();
        assert_eq!(ev.describe(), "08:30 antibiotic (half pill)");
    }

    #[test]
    fn malformed_time_has_no_moment() {
        let ev = CareEvent::from_cells(&cells(&["Mimi", "2024-01-01", "late", "Litter", "ok"]))
            .unwrap();
        assert!(ev.moment().is_none());
    }

    #[test]
    fn legacy_labels_match_by_category() {
        let key = |category| CareIdentity {
            subject: "Mimi".into(),
            date: "2024-01-01".into(),
            time: "09:00".into(),
            category,
            content: "sleepy".into(),
        };

        let note = CareEvent::from_cells(&cells(&["Mimi", "2024-01-01", "09:00", "Note", "sleepy"]))
            .unwrap();
        assert!(note.matches(&key(Category::Other)));
        assert!(!note.matches(&key(Category::Litter)));

        let fed = CareEvent::from_cells(&cells(&["Mimi", "2024-01-01", "09:00", "餵食", "sleepy"]))
            .unwrap();
        assert!(fed.matches(&key(Category::Feeding)));
    }
}
