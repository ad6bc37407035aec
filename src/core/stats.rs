//! Feeding statistics and weight trend views.

use crate::core::summary::parse_quantity;
use crate::models::summary::{DailyFeeding, WeightPoint};
use crate::models::{CareEvent, Category};
use crate::utils::formatting::round_to;
use std::collections::BTreeMap;

/// Total food per day, most recent day first.
///
/// Unlike the daily summary, content that is not a number counts as zero here.
pub fn daily_totals(events: &[CareEvent], spoon_to_gram: f64) -> Vec<DailyFeeding> {
    let mut per_day: BTreeMap<&str, f64> = BTreeMap::new();

    for ev in events.iter().filter(|ev| ev.category == Category::Feeding) {
        *per_day.entry(ev.date.as_str()).or_insert(0.0) += parse_quantity(&ev.content).unwrap_or(0.0);
    }

    per_day
        .into_iter()
        .rev()
        .map(|(date, spoons)| {
            let spoons = round_to(spoons, 3);
            DailyFeeding {
                date: date.to_string(),
                total_spoons: spoons,
                total_grams: round_to(spoons * spoon_to_gram, 2),
            }
        })
        .collect()
}

/// The `days` most recent rows of `totals`, oldest first, for charting.
pub fn trend(totals: &[DailyFeeding], days: usize) -> Vec<DailyFeeding> {
    let mut slice: Vec<DailyFeeding> = totals.iter().take(days).cloned().collect();
    slice.reverse();
    slice
}

/// Weight entries that parse as kilograms, oldest first.
pub fn weight_series(events: &[CareEvent]) -> Vec<WeightPoint> {
    let mut points: Vec<WeightPoint> = events
        .iter()
        .filter(|ev| ev.category == Category::Weight)
        .filter_map(|ev| {
            let raw = ev.content.trim().trim_end_matches("kg").trim_end();
            parse_quantity(raw).map(|kg| WeightPoint {
                date: ev.date.clone(),
                time: ev.time.clone(),
                kg,
            })
        })
        .collect();

    points.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::summary::SPOON_TO_GRAM;

    fn ev(category: Category, content: &str, date: &str, time: &str) -> CareEvent {
        CareEvent {
            subject: "Mimi".into(),
            date: date.into(),
            time: time.into(),
            category,
            content: content.into(),
            note: String::new(),
            id: None,
        }
    }

    #[test]
    fn same_day_entries_are_grouped() {
        let events = vec![
            ev(Category::Feeding, "0.5", "2024-01-01", "09:00"),
            ev(Category::Feeding, "1.0", "2024-01-01", "18:00"),
        ];

        let totals = daily_totals(&events, SPOON_TO_GRAM);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].total_spoons, 1.5);
        assert_eq!(totals[0].total_grams, 16.5);
    }

    #[test]
    fn unparsed_content_counts_as_zero() {
        let events = vec![
            ev(Category::Feeding, "x", "2024-01-01", "09:00"),
            ev(Category::Feeding, "1", "2024-01-01", "10:00"),
            ev(Category::Feeding, "treats", "2024-01-02", "10:00"),
        ];

        let totals = daily_totals(&events, SPOON_TO_GRAM);
        assert_eq!(totals[0].date, "2024-01-02");
        assert_eq!(totals[0].total_spoons, 0.0);
        assert_eq!(totals[1].total_spoons, 1.0);
        assert_eq!(totals[1].total_grams, 11.0);
    }

    #[test]
    fn other_categories_are_ignored() {
        let events = vec![ev(Category::Weight, "5", "2024-01-01", "09:00")];
        assert!(daily_totals(&events, SPOON_TO_GRAM).is_empty());
    }

    #[test]
    fn trend_keeps_recent_days_oldest_first() {
        let events: Vec<CareEvent> = (1..=5)
            .map(|d| ev(Category::Feeding, "1", &format!("2024-01-0{}", d), "09:00"))
            .collect();
        let totals = daily_totals(&events, SPOON_TO_GRAM);

        let dates: Vec<String> = trend(&totals, 3).into_iter().map(|t| t.date).collect();
        assert_eq!(dates, vec!["2024-01-03", "2024-01-04", "2024-01-05"]);
    }

    #[test]
    fn weight_series_skips_text_and_sorts_ascending() {
        let events = vec![
            ev(Category::Weight, "5.3 kg", "2024-01-03", "09:00"),
            ev(Category::Weight, "heavy", "2024-01-02", "09:00"),
            ev(Category::Weight, "5.1", "2024-01-01", "09:00"),
        ];

        let kgs: Vec<f64> = weight_series(&events).iter().map(|p| p.kg).collect();
        assert_eq!(kgs, vec![5.1, 5.3]);
    }
}
