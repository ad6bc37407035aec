use crate::models::summary::{DailySummary, FeedingTotal, NONE_LABEL};
use crate::models::{CareEvent, Category};
use crate::utils::formatting::{fmt_number, round_to};

/// 1 spoon of food = 11 grams.
pub const SPOON_TO_GRAM: f64 = 11.0;

pub const SPOON_UNIT: &str = "匙";

/// Numeric content of a feeding/weight entry, if any.
pub fn parse_quantity(content: &str) -> Option<f64> {
    content
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

pub fn summarize(events: &[CareEvent], target_date: &str) -> DailySummary {
    summarize_with_ratio(events, target_date, SPOON_TO_GRAM)
}

/// Build the daily summary for one subject.
///
/// `events` is expected most recent first (see `select_and_sort`), which
/// makes the first weight of the day the latest one.
pub fn summarize_with_ratio(
    events: &[CareEvent],
    target_date: &str,
    spoon_to_gram: f64,
) -> DailySummary {
    let mut feeding = FeedingTotal::default();
    let mut meds = Vec::new();
    let mut litter = Vec::new();
    let mut other = Vec::new();
    let mut weights = Vec::new();

    for ev in events.iter().filter(|ev| ev.date == target_date) {
        match ev.category {
            Category::Feeding => match parse_quantity(&ev.content) {
                Some(v) => {
                    feeding.entries += 1;
                    feeding.spoons += v;
                }
                None => feeding.unparsed.push(ev.content.clone()),
            },
            Category::Medication => meds.push(ev.describe()),
            Category::Litter => litter.push(ev.describe()),
            Category::Other => other.push(ev.describe()),
            Category::Weight => weights.push(format!("{} kg", ev.content)),
        }
    }

    feeding.spoons = round_to(feeding.spoons, 3);
    feeding.grams = round_to(feeding.spoons * spoon_to_gram, 2);

    DailySummary {
        date: target_date.to_string(),
        food: food_message(&feeding),
        medication: join_or_none(&meds),
        litter: join_or_none(&litter),
        other: join_or_none(&other),
        weight: weights
            .into_iter()
            .next()
            .unwrap_or_else(|| NONE_LABEL.to_string()),
        feeding,
    }
}

fn food_message(feeding: &FeedingTotal) -> String {
    let unparsed = feeding.unparsed.join(",");

    match (feeding.entries, unparsed.is_empty()) {
        (0, true) => NONE_LABEL.to_string(),
        (0, false) => format!("{} + {}", NONE_LABEL, unparsed),
        (_, true) => format!(
            "{} {} ({}g)",
            fmt_number(feeding.spoons),
            SPOON_UNIT,
            fmt_number(feeding.grams)
        ),
        (_, false) => format!(
            "{} {} ({}g) + {}",
            fmt_number(feeding.spoons),
            SPOON_UNIT,
            fmt_number(feeding.grams),
            unparsed
        ),
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        NONE_LABEL.to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn empty_day_is_none_everywhere() {
        let events = vec![ev(Category::Feeding, "1", "2024-01-02", "09:00")];
        let s = summarize(&events, "2024-01-01");
        assert_eq!(s.food, NONE_LABEL);
        assert_eq!(s.medication, NONE_LABEL);
        assert_eq!(s.litter, NONE_LABEL);
        assert_eq!(s.other, NONE_LABEL);
        assert_eq!(s.weight, NONE_LABEL);
    }

    #[test]
    fn unparsed_feeding_is_kept_as_text() {
        let events = vec![
            ev(Category::Feeding, "0.5", "2024-01-01", "09:00"),
            ev(Category::Feeding, "x", "2024-01-01", "10:00"),
        ];
        let s = summarize(&events, "2024-01-01");
        assert_eq!(s.food, "0.5 匙 (5.5g) + x");
    }

    #[test]
    fn feeding_total_ignores_order() {
        let a = vec![
            ev(Category::Feeding, "0.5", "2024-01-01", "09:00"),
            ev(Category::Feeding, "0.25", "2024-01-01", "12:00"),
        ];
        let b: Vec<CareEvent> = a.iter().rev().cloned().collect();

        for events in [a, b] {
            let s = summarize(&events, "2024-01-01");
            assert_eq!(s.feeding.spoons, 0.75);
            assert_eq!(s.feeding.grams, 8.25);
            assert_eq!(s.food, "0.75 匙 (8.25g)");
        }
    }

    #[test]
    fn only_unparsed_feeding_is_appended_to_none() {
        let events = vec![
            ev(Category::Feeding, "half can", "2024-01-01", "09:00"),
            ev(Category::Feeding, "treats", "2024-01-01", "10:00"),
        ];
        assert_eq!(
            summarize(&events, "2024-01-01").food,
            "(none) + half can,treats"
        );
    }

    #[test]
    fn latest_weight_wins_and_lists_keep_notes() {
        let mut med = ev(Category::Medication, "antibiotic", "2024-01-01", "20:00");
        med.note = "with food".into();
        let events = vec![
            ev(Category::Weight, "5.3", "2024-01-01", "21:00"),
            med,
            ev(Category::Weight, "5.1", "2024-01-01", "08:00"),
            ev(Category::Litter, "normal", "2024-01-01", "07:00"),
        ];

        let s = summarize(&events, "2024-01-01");
        assert_eq!(s.weight, "5.3 kg");
        assert_eq!(s.medication, "20:00 antibiotic (with food)");
        assert_eq!(s.litter, "07:00 normal");
    }

    #[test]
    fn weight_content_is_never_parsed() {
        let events = vec![ev(Category::Weight, "about 5", "2024-01-01", "08:00")];
        assert_eq!(summarize(&events, "2024-01-01").weight, "about 5 kg");
    }

    #[test]
    fn custom_ratio_is_applied() {
        let events = vec![ev(Category::Feeding, "2", "2024-01-01", "09:00")];
        let s = summarize_with_ratio(&events, "2024-01-01", 12.5);
        assert_eq!(s.food, "2 匙 (25g)");
    }
}
