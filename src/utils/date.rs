//! Date/time helpers: parsing user input, "now" defaults.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveTime, Timelike};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local time truncated to the minute.
pub fn now_time() -> NaiveTime {
    let now = Local::now().time();
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Accepts `H:M`, `HH:MM` and `HHMM`; the result is always formatted zero-padded.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H%M"))
        .ok()
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<NaiveDate> {
    match input {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(today()),
    }
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<NaiveTime> {
    match input {
        Some(s) => parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string())),
        None => Ok(now_time()),
    }
}

/// Validate a date argument and return it in canonical `YYYY-MM-DD` form.
pub fn canonical_date(s: &str) -> AppResult<String> {
    parse_date(s)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Validate a time argument and return it in canonical `HH:MM` form.
pub fn canonical_time(s: &str) -> AppResult<String> {
    parse_time(s)
        .map(|t| t.format("%H:%M").to_string())
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_are_zero_padded() {
        assert_eq!(canonical_time("9:05").unwrap(), "09:05");
        assert_eq!(canonical_time("0930").unwrap(), "09:30");
        assert!(canonical_time("25:00").is_err());
    }

    #[test]
    fn dates_must_be_iso() {
        assert_eq!(canonical_date("2024-1-2").unwrap(), "2024-01-02");
        assert!(matches!(canonical_date("02/01/2024"), Err(AppError::InvalidDate(_))));
    }

    #[test]
    fn missing_values_default_to_now() {
        assert_eq!(parse_optional_date(None).unwrap(), today());
        assert_eq!(parse_optional_time(None).unwrap().second(), 0);
    }
}
