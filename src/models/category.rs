use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Feeding,    // spoons
    Medication, // medicine name
    Weight,     // kg
    Litter,
    Other, // also the legacy "Note" tag
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Feeding,
        Category::Medication,
        Category::Weight,
        Category::Litter,
        Category::Other,
    ];

    /// Convert enum → sheet string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Category::Feeding => "Feeding",
            Category::Medication => "Medication",
            Category::Weight => "Weight",
            Category::Litter => "Litter",
            Category::Other => "Other",
        }
    }

    /// Convert sheet string → enum.
    ///
    /// Besides the canonical names this accepts the legacy `Note` tag and the
    /// Chinese labels written by older sheets.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim() {
            "Feeding" | "餵食" => Some(Category::Feeding),
            "Medication" | "餵藥" => Some(Category::Medication),
            "Weight" | "體重" => Some(Category::Weight),
            "Litter" | "排便" => Some(Category::Litter),
            "Other" | "Note" | "備註" => Some(Category::Other),
            _ => None,
        }
    }

    /// Helper: convert input from CLI (case-insensitive, short codes allowed)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "feeding" | "feed" | "food" | "f" => Some(Category::Feeding),
            "medication" | "med" | "meds" | "m" => Some(Category::Medication),
            "weight" | "w" => Some(Category::Weight),
            "litter" | "l" => Some(Category::Litter),
            "other" | "note" | "o" => Some(Category::Other),
            _ => Category::from_db_str(code),
        }
    }

    /// Hint shown next to the content field.
    pub fn content_hint(&self) -> &'static str {
        match self {
            Category::Feeding => "spoons (e.g. 0.5)",
            Category::Weight => "kilograms (e.g. 5.2)",
            Category::Medication => "medicine name (e.g. antibiotic)",
            Category::Litter | Category::Other => "free text",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
