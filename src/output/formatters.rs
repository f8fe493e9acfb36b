//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Duration, Local, Utc};

use crate::client::Location;

/// Format a timestamp in the local timezone.
///
/// # Example output
/// `2025-01-15 14:30`
pub fn format_date_local(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Format a remaining lifetime as `Xm Ys`, or `expired`.
pub fn format_remaining(remaining: Duration) -> String {
    let secs = remaining.num_seconds();
    if secs <= 0 {
        return "expired".to_string();
    }

    let mins = secs / 60;
    let secs = secs % 60;
    if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Short one-line rendering of a location.
pub fn format_location(location: Option<&Location>) -> String {
    match location {
        None => "-".to_string(),
        Some(loc) => match loc.address.as_deref().filter(|a| !a.is_empty()) {
            Some(address) => address.to_string(),
            None => format!("{:.4}, {:.4}", loc.latitude, loc.longitude),
        },
    }
}

/// Truncate string to max characters with ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
