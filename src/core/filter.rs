use crate::models::{CareEvent, Category, MedicalRecord};

/// Events of one subject, most recent first.
///
/// Events are ordered by their combined date/time moment. If any of them has
/// a date or time that does not parse, the whole set is ordered by the raw
/// `(date, time)` strings instead, which is the same order for well-formed
/// zero-padded values.
pub fn select_and_sort(events: &[CareEvent], subject: &str) -> Vec<CareEvent> {
    let mut selected: Vec<CareEvent> = events
        .iter()
        .filter(|ev| ev.subject == subject)
        .cloned()
        .collect();

    let moments: Option<Vec<_>> = selected.iter().map(CareEvent::moment).collect();

    if moments.is_some() {
        selected.sort_by(|a, b| b.moment().cmp(&a.moment()));
    } else {
        selected.sort_by(|a, b| (&b.date, &b.time).cmp(&(&a.date, &a.time)));
    }

    selected
}

/// History tab for one category, keeping the incoming order.
pub fn by_category(events: &[CareEvent], category: Category) -> Vec<CareEvent> {
    events
        .iter()
        .filter(|ev| ev.category == category)
        .cloned()
        .collect()
}

/// Distinct subjects in first-seen store order.
pub fn subjects(events: &[CareEvent]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for ev in events {
        if !out.contains(&ev.subject) {
            out.push(ev.subject.clone());
        }
    }
    out
}

/// Vet visits of one subject, most recent date first (stable for equal dates).
pub fn medical_history(records: &[MedicalRecord], subject: &str) -> Vec<MedicalRecord> {
    let mut selected: Vec<MedicalRecord> = records
        .iter()
        .filter(|r| r.subject == subject)
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.date.cmp(&a.date));
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(subject: &str, date: &str, time: &str) -> CareEvent {
        CareEvent {
            subject: subject.into(),
            date: date.into(),
            time: time.into(),
            category: Category::Litter,
            content: "ok".into(),
            note: String::new(),
            id: None,
        }
    }

    #[test]
    fn keeps_only_the_subject_most_recent_first() {
        let events = vec![
            ev("Mimi", "2024-01-01", "09:00"),
            ev("Coco", "2024-01-03", "09:00"),
            ev("Mimi", "2024-01-02", "08:00"),
            ev("Mimi", "2024-01-01", "21:30"),
        ];

        let sorted = select_and_sort(&events, "Mimi");
        let keys: Vec<(&str, &str)> = sorted
            .iter()
            .map(|e| (e.date.as_str(), e.time.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2024-01-02", "08:00"),
                ("2024-01-01", "21:30"),
                ("2024-01-01", "09:00")
            ]
        );
    }

    #[test]
    fn subject_match_is_exact() {
        let events = vec![ev("mimi", "2024-01-01", "09:00"), ev("Mimi ", "2024-01-01", "09:00")];
        assert!(select_and_sort(&events, "Mimi").is_empty());
    }

    #[test]
    fn malformed_moment_falls_back_to_lexical_order() {
        let events = vec![
            ev("Mimi", "2024-01-01", "09:00"),
            ev("Mimi", "2024-01-02", "noon"),
            ev("Mimi", "2024-01-01", "10:00"),
        ];

        let sorted = select_and_sort(&events, "Mimi");
        let times: Vec<&str> = sorted.iter().map(|e| e.time.as_str()).collect();
        assert_eq!(times, vec!["noon", "10:00", "09:00"]);
    }

    #[test]
    fn result_is_non_increasing() {
        let events: Vec<CareEvent> = (0..20)
            .map(|i| ev("Mimi", &format!("2024-01-{:02}", (i * 7) % 28 + 1), &format!("{:02}:00", (i * 5) % 24)))
            .collect();

        let sorted = select_and_sort(&events, "Mimi");
        for pair in sorted.windows(2) {
            assert!((&pair[0].date, &pair[0].time) >= (&pair[1].date, &pair[1].time));
        }
    }

    #[test]
    fn subjects_are_listed_once_in_store_order() {
        let events = vec![
            ev("Mimi", "2024-01-01", "09:00"),
            ev("Coco", "2024-01-01", "09:00"),
            ev("Mimi", "2024-01-02", "09:00"),
        ];
        assert_eq!(subjects(&events), vec!["Mimi", "Coco"]);
    }

    #[test]
    fn medical_history_is_newest_first() {
        let visit = |subject: &str, date: &str, details: &str| MedicalRecord {
            subject: subject.into(),
            date: date.into(),
            category: "Checkup".into(),
            weight: String::new(),
            hospital: String::new(),
            details: details.into(),
            link: String::new(),
            id: None,
        };
        let records = vec![
            visit("Mimi", "2024-01-01", "a"),
            visit("Coco", "2024-03-01", "b"),
            visit("Mimi", "2024-02-01", "c"),
            visit("Mimi", "2024-01-01", "d"),
        ];

        let details: Vec<String> = medical_history(&records, "Mimi")
            .into_iter()
            .map(|r| r.details)
            .collect();
        assert_eq!(details, vec!["c", "a", "d"]);
    }
}
