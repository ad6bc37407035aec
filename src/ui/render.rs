//! Terminal views: summary panel, history tables, feeding and weight trends.

use crate::models::summary::{DailyFeeding, DailySummary, WeightPoint};
use crate::models::{CareEvent, MedicalRecord};
use crate::utils::colors::{RESET, color_for_category, colorize_optional};
use crate::utils::formatting::{bar, bold, fmt_number};
use crate::utils::table::{Column, Table};

const BAR_WIDTH: usize = 30;

pub fn summary_lines(summary: &DailySummary) -> Vec<String> {
    vec![
        format!("🍖 Food:       {}", colorize_optional(&summary.food)),
        format!("💊 Medication: {}", colorize_optional(&summary.medication)),
        format!("💩 Litter:     {}", colorize_optional(&summary.litter)),
        format!("⚖️  Weight:     {}", colorize_optional(&summary.weight)),
        format!("📝 Other:      {}", colorize_optional(&summary.other)),
    ]
}

pub fn print_summary(subject: &str, summary: &DailySummary) {
    println!(
        "\n📊 {} ({})",
        bold(&format!("Daily summary for {}", subject)),
        summary.date
    );
    for line in summary_lines(summary) {
        println!("   {}", line);
    }
}

pub fn events_table(events: &[CareEvent], show_ids: bool) -> Table {
    let mut columns = vec![
        Column::new("date", 10),
        Column::new("time", 5),
        Column::new("category", 10),
        Column::new("content", 30),
        Column::new("note", 30),
    ];
    if show_ids {
        columns.push(Column::new("id", 36));
    }

    let mut table = Table::new(columns);
    for ev in events {
        let mut row = vec![
            ev.date.clone(),
            ev.time.clone(),
            ev.category.to_string(),
            ev.content.clone(),
            ev.note.clone(),
        ];
        if show_ids {
            row.push(ev.id.clone().unwrap_or_else(|| "-".to_string()));
        }
        table.add_row(row);
    }
    table
}

/// Like `events_table(..).render()`, with the category column colored.
pub fn print_events(events: &[CareEvent], show_ids: bool) {
    let rendered = events_table(events, show_ids).render();
    let mut lines = rendered.lines();

    for l in lines.by_ref().take(2) {
        println!("{}", l);
    }

    // data lines follow event order; wrapped cells add continuation lines
    let mut current = events.iter();
    let mut color = RESET;
    for l in lines {
        if !l.starts_with(' ')
            && let Some(ev) = current.next()
        {
            color = color_for_category(ev.category);
        }
        println!("{}{}{}", color, l, RESET);
    }
}

pub fn feeding_table(totals: &[DailyFeeding]) -> Table {
    let mut table = Table::new(vec![
        Column::new("date", 10),
        Column::new("spoons", 8),
        Column::new("grams", 8),
    ]);
    for t in totals {
        table.add_row(vec![
            t.date.clone(),
            fmt_number(t.total_spoons),
            fmt_number(t.total_grams),
        ]);
    }
    table
}

pub fn trend_lines(points: &[DailyFeeding]) -> Vec<String> {
    let max = points.iter().map(|p| p.total_grams).fold(0.0, f64::max);
    points
        .iter()
        .map(|p| {
            format!(
                "{} {:>8}g {}",
                p.date,
                fmt_number(p.total_grams),
                bar(p.total_grams, max, BAR_WIDTH)
            )
        })
        .collect()
}

pub fn weight_lines(points: &[WeightPoint]) -> Vec<String> {
    let max = points.iter().map(|p| p.kg).fold(0.0, f64::max);
    points
        .iter()
        .map(|p| {
            format!(
                "{} {} {:>6} kg {}",
                p.date,
                p.time,
                fmt_number(p.kg),
                bar(p.kg, max, BAR_WIDTH)
            )
        })
        .collect()
}

pub fn medical_table(records: &[MedicalRecord], show_ids: bool) -> Table {
    let mut columns = vec![
        Column::new("date", 10),
        Column::new("category", 12),
        Column::new("weight", 6),
        Column::new("hospital", 20),
        Column::new("details", 30),
        Column::new("link", 30),
    ];
    if show_ids {
        columns.push(Column::new("id", 36));
    }

    let mut table = Table::new(columns);
    for r in records {
        let mut row = vec![
            r.date.clone(),
            r.category.clone(),
            r.weight.clone(),
            r.hospital.clone(),
            r.details.clone(),
            r.link.clone(),
        ];
        if show_ids {
            row.push(r.id.clone().unwrap_or_else(|| "-".to_string()));
        }
        table.add_row(row);
    }
    table
}
