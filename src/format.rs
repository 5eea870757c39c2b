//! Display helpers shared by table rows and detail panels.

use chrono::NaiveDateTime;

/// Placeholder for values the backend did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Rupee amount with two decimals, e.g. `₹45.50`.
pub fn money(amount: f64) -> String {
    format!("₹{amount:.2}")
}

pub fn date(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub fn date_time(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Value or a fallback when missing or blank.
pub fn or_default(value: Option<&str>, fallback: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

pub fn active_label(is_active: bool) -> &'static str {
    if is_active { "Active" } else { "Inactive" }
}
