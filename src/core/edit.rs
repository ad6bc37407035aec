use crate::core::add::require_content;
use crate::core::locate::{Target, locate_target};
use crate::core::snapshot::Snapshot;
use crate::db::sheet::Worksheet;
use crate::errors::{AppError, AppResult};
use crate::models::care_event::{COL_CONTENT, COL_NOTE};
use crate::models::medical_record::COL_FIRST_EDITABLE;
use crate::models::{CareEvent, CareIdentity, MedicalIdentity, MedicalRecord};

/// New values for the editable columns of a medical record.
#[derive(Debug, Clone, Default)]
pub struct MedicalPatch {
    pub date: Option<String>,
    pub category: Option<String>,
    pub weight: Option<String>,
    pub hospital: Option<String>,
    pub details: Option<String>,
    pub link: Option<String>,
}

impl MedicalPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.weight.is_none()
            && self.hospital.is_none()
            && self.details.is_none()
            && self.link.is_none()
    }

    fn apply(&self, rec: &MedicalRecord) -> MedicalRecord {
        fn pick(new: &Option<String>, old: &str) -> String {
            new.as_deref().map(str::trim).unwrap_or(old).to_string()
        }

        MedicalRecord {
            subject: rec.subject.clone(),
            date: pick(&self.date, &rec.date),
            category: pick(&self.category, &rec.category),
            weight: pick(&self.weight, &rec.weight),
            hospital: pick(&self.hospital, &rec.hospital),
            details: pick(&self.details, &rec.details),
            link: pick(&self.link, &rec.link),
            id: rec.id.clone(),
        }
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Overwrite `content` and/or `note` of one care event.
    ///
    /// Identity fields other than `content` are never touched. Returns the
    /// sheet row that was updated.
    pub fn update_event<W: Worksheet>(
        sheet: &mut W,
        target: &Target<CareIdentity>,
        content: Option<&str>,
        note: Option<&str>,
    ) -> AppResult<usize> {
        if content.is_none() && note.is_none() {
            return Err(AppError::NothingToUpdate);
        }
        let content = content.map(require_content).transpose()?;

        let snapshot: Snapshot<CareEvent> = Snapshot::fetch(sheet)?;
        let row = locate_target(&snapshot.rows, target)
            .ok_or_else(|| AppError::RecordNotFound(target.to_string()))?;

        // content and note are adjacent, so both fit in one write
        let (first_col, values) = match (content, note) {
            (Some(c), Some(n)) => (COL_CONTENT, vec![c, n.trim().to_string()]),
            (Some(c), None) => (COL_CONTENT, vec![c]),
            (None, Some(n)) => (COL_NOTE, vec![n.trim().to_string()]),
            (None, None) => return Err(AppError::NothingToUpdate),
        };
        sheet.update_row(row, first_col, &values)?;

        Ok(row)
    }

    /// Rewrite every column of a medical record except `subject` and `id`.
    pub fn update_medical<W: Worksheet>(
        sheet: &mut W,
        target: &Target<MedicalIdentity>,
        patch: &MedicalPatch,
    ) -> AppResult<(usize, MedicalRecord)> {
        if patch.is_empty() {
            return Err(AppError::NothingToUpdate);
        }

        let snapshot: Snapshot<MedicalRecord> = Snapshot::fetch(sheet)?;
        let row = locate_target(&snapshot.rows, target)
            .ok_or_else(|| AppError::RecordNotFound(target.to_string()))?;
        let current = snapshot
            .record_at(row)
            .ok_or_else(|| AppError::RecordNotFound(target.to_string()))?;

        let updated = patch.apply(current);
        sheet.update_row(row, COL_FIRST_EDITABLE, &updated.editable_cells())?;

        Ok((row, updated))
    }
}
