//! Report formatting utilities for terminal output
//!
//! Shared helpers for the plain-text report tables.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt::Write;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format an optional percentage with one decimal, or "n/a" when undefined
pub fn format_percentage(pct: Option<Decimal>) -> String {
    match pct {
        Some(p) => format!("{:.1}%", p),
        None => "n/a".to_string(),
    }
}

/// Render a progress bar for a percentage already clamped to 0..=100
pub fn format_bar(percentage: Decimal, width: usize) -> String {
    let fraction = (percentage / Decimal::ONE_HUNDRED)
        .clamp(Decimal::ZERO, Decimal::ONE)
        .to_f64()
        .unwrap_or(0.0);

    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Whether a strftime pattern can render a calendar date
///
/// Time fields such as `%H` and unknown specifiers fail for dates.
pub fn is_date_format(pattern: &str) -> bool {
    let sample = NaiveDate::default();
    let mut out = String::new();
    write!(out, "{}", sample.format(pattern)).is_ok()
}

/// Format a date with a strftime pattern, or as `YYYY-MM-DD` if the pattern
/// cannot render a date
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(pattern)) {
        Ok(()) => out,
        Err(_) => date.format(FALLBACK_DATE_FORMAT).to_string(),
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
