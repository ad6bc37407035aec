use serde::Serialize;

/// Placeholder shown for an empty summary line.
pub const NONE_LABEL: &str = "(none)";

/// Per-day, per-category view for one subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: String,
    pub food: String,
    pub medication: String,
    pub litter: String,
    pub other: String,
    pub weight: String,
    /// Raw feeding figures behind `food`.
    pub feeding: FeedingTotal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedingTotal {
    pub entries: usize,
    pub spoons: f64,
    pub grams: f64,
    pub unparsed: Vec<String>,
}

/// One row of the feeding statistics table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyFeeding {
    pub date: String,
    pub total_spoons: f64,
    pub total_grams: f64,
}

/// One point of the weight trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPoint {
    pub date: String,
    pub time: String,
    pub kg: f64,
}
