pub mod care_event;
pub mod category;
pub mod identity;
pub mod medical_record;
pub mod sheet_row;
pub mod summary;

pub use care_event::{CareEvent, CareIdentity};
pub use category::Category;
pub use identity::Identified;
pub use medical_record::{MedicalIdentity, MedicalRecord};
pub use sheet_row::{SheetRecord, SheetRow};
