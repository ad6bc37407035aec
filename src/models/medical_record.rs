use super::identity::Identified;
use super::sheet_row::{SheetRecord, cell};
use serde::Serialize;
use std::fmt;

/// First editable column (1-based) of the `medical` sheet: everything after `subject`.
pub const COL_FIRST_EDITABLE: usize = 2;

/// One veterinary visit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicalRecord {
    pub subject: String,
    pub date: String,
    pub category: String, // free text: Vaccine, Checkup, Surgery, ...
    pub weight: String,
    pub hospital: String,
    pub details: String,
    pub link: String,
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicalIdentity {
    pub subject: String,
    pub date: String,
    pub category: String,
    pub hospital: String,
    pub weight: String,
    pub details: String,
    pub link: String,
}

impl MedicalRecord {
    pub fn identity(&self) -> MedicalIdentity {
        MedicalIdentity {
            subject: self.subject.clone(),
            date: self.date.clone(),
            category: self.category.clone(),
            hospital: self.hospital.clone(),
            weight: self.weight.clone(),
            details: self.details.clone(),
            link: self.link.clone(),
        }
    }

    /// Cells written by an update, starting at `COL_FIRST_EDITABLE`.
    pub fn editable_cells(&self) -> Vec<String> {
        let mut cells = self.to_cells();
        cells.truncate(Self::HEADER.len() - 1); // keep id untouched
        cells.split_off(COL_FIRST_EDITABLE - 1)
    }
}

impl fmt::Display for MedicalIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} at '{}'",
            self.subject, self.date, self.category, self.hospital
        )
    }
}

impl Identified for MedicalRecord {
    type Key = MedicalIdentity;

    fn matches(&self, key: &MedicalIdentity) -> bool {
        self.subject == key.subject
            && self.date == key.date
            && self.category == key.category
            && self.hospital == key.hospital
            && self.weight == key.weight
            && self.details == key.details
            && self.link == key.link
    }

    fn record_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl SheetRecord for MedicalRecord {
    const HEADER: &'static [&'static str] = &[
        "subject", "date", "category", "weight", "hospital", "details", "link", "id",
    ];

    fn from_cells(cells: &[String]) -> Result<Self, String> {
        let subject = cell(cells, 0);
        let date = cell(cells, 1);

        if subject.is_empty() {
            return Err("missing subject".into());
        }
        if date.is_empty() {
            return Err("missing date".into());
        }

        let id = cell(cells, 7);

        Ok(MedicalRecord {
            subject,
            date,
            category: cell(cells, 2),
            weight: cell(cells, 3),
            hospital: cell(cells, 4),
            details: cell(cells, 5),
            link: cell(cells, 6),
            id: if id.is_empty() { None } else { Some(id) },
        })
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.subject.clone(),
            self.date.clone(),
            self.category.clone(),
            self.weight.clone(),
            self.hospital.clone(),
            self.details.clone(),
            self.link.clone(),
            self.id.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MedicalRecord {
        MedicalRecord {
            subject: "Mimi".into(),
            date: "2024-03-02".into(),
            category: "Vaccine".into(),
            weight: "4.8".into(),
            hospital: "Happy Paws".into(),
            details: "FVRCP booster".into(),
            link: "".into(),
            id: Some("abc".into()),
        }
    }

    #[test]
    fn editable_cells_skip_subject_and_id() {
        let cells = sample().editable_cells();
        assert_eq!(
            cells,
            vec!["2024-03-02", "Vaccine", "4.8", "Happy Paws", "FVRCP booster", ""]
        );
    }

    #[test]
    fn identity_requires_every_field() {
        let rec = sample();
        let mut key = rec.identity();
        assert!(rec.matches(&key));
        key.link = "https://example.org/report".into();
        assert!(!rec.matches(&key));
    }
}
