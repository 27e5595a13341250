//! Sort-key derivation from free-text dates.
//!
//! Header dates arrive in a few conventions; one shared parser applies
//! one canonical order everywhere so day/month-ambiguous inputs never
//! resolve differently in different code paths:
//!
//! 1. RFC 3339 (`2024-01-10T12:30:00Z`)
//! 2. ISO calendar date (`YYYY-MM-DD`)
//! 3. Day-first localized date (`DD/MM/YYYY`)
//!
//! `03/04/2025` is therefore always 3 April 2025. Anything unparseable
//! (or absent) maps to the oldest representable instant, so undated
//! documents sort last and ordering never fails.

use chrono::{DateTime, NaiveDate, Utc};

/// Parse a metadata `date` value into an ordering key.
///
/// Never errors; the fallback is [`DateTime::<Utc>::MIN_UTC`].
pub fn parse_sort_key(date: Option<&str>) -> DateTime<Utc> {
    date.and_then(parse_date).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%d/%m/%Y"))
        .ok()?;

    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}
