//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Shortest human form of a number: `5.5`, `16.5`, `1`.
pub fn fmt_number(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

/// Horizontal text bar proportional to `value / max`.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "█".repeat(filled.clamp(1, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_matches_display_precision() {
        assert_eq!(round_to(0.1 + 0.2, 3), 0.3);
        assert_eq!(round_to(0.75 * 11.0, 2), 8.25);
        assert_eq!(round_to(1.0 / 3.0, 3), 0.333);
    }

    #[test]
    fn numbers_use_the_shortest_form() {
        assert_eq!(fmt_number(5.5), "5.5");
        assert_eq!(fmt_number(16.0), "16");
        assert_eq!(fmt_number(-0.0), "0");
    }

    #[test]
    fn bars_scale_to_width() {
        assert_eq!(bar(10.0, 10.0, 4), "████");
        assert_eq!(bar(5.0, 10.0, 4), "██");
        assert_eq!(bar(0.1, 10.0, 4), "█");
        assert_eq!(bar(0.0, 10.0, 4), "");
    }
}
