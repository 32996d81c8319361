//! Display Formatting
//!
//! Avatar initials, timestamps and notification text.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

use crate::models::Notification;

const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Default actor name when a notification has no sender
pub const UNKNOWN_ACTOR: &str = "Seseorang";

/// First two characters, uppercased
pub fn initials(name: &str) -> String {
    name.chars().take(2).flat_map(char::to_uppercase).collect()
}

/// Timestamps without an offset, read as local time
const LOCAL_PATTERNS: [&str; 7] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for pattern in LOCAL_PATTERNS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt);
        }
    }
    // Date-only values are UTC midnight, shown in local time
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().with_timezone(&Local).naive_local())
}

/// `14 Okt, 09.30`, following the id-ID locale
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => format!(
            "{:02} {}, {:02}.{:02}",
            dt.day(),
            MONTHS_ID[dt.month0() as usize],
            dt.hour(),
            dt.minute()
        ),
        None => "Invalid Date".to_string(),
    }
}

pub fn notification_actor(n: &Notification) -> &str {
    n.from_username
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_ACTOR)
}

/// `like di post #12`, or just the type when no post is attached
pub fn notification_text(n: &Notification) -> String {
    match n.post_id.as_deref() {
        Some(id) => format!("{} di post #{}", n.kind, id),
        None => n.kind.clone(),
    }
}
