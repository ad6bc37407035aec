//! ANSI color helper utilities for terminal output.
use crate::models::Category;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn color_for_category(category: Category) -> &'static str {
    match category {
        Category::Feeding => BLUE,
        Category::Medication => YELLOW,
        Category::Weight => RED,
        Category::Litter => GREEN,
        Category::Other => MAGENTA,
    }
}

/// Grey out the "(none)" placeholder, leave real values as they are.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value == crate::models::summary::NONE_LABEL {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
