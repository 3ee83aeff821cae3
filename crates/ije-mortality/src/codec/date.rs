//! Date-part codec.
//!
//! IJE splits timestamps into separate year, month, day and time fields. A
//! setter updates one component of whatever timestamp the record already
//! holds (or of `0001-01-01T00:00:00` when it holds none) and writes the
//! result back in the property's serialization style. Getters normalize the
//! stored value to UTC before extracting the component.
//!
//! Sentinels: `99` in an hour, minute, month or day and `9999` in a year mean
//! "unknown" and leave that component as it was, whichever field carries
//! them. Components that would produce an impossible date are ignored. When
//! no component applies, the stored value is left alone; an all-unknown date
//! on an empty record stays empty.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Timelike, Utc};

use super::blank;

/// Component of a timestamp carried by one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    /// `yyyy`
    Year,
    /// `MM`
    Month,
    /// `dd`
    Day,
    /// `HHmm`
    Time,
    /// `MMddyyyy`
    MonthDayYear,
}

impl DatePart {
    /// Minimum number of characters a value needs.
    pub const fn len(self) -> usize {
        match self {
            Self::Year | Self::Time => 4,
            Self::Month | Self::Day => 2,
            Self::MonthDayYear => 8,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            Self::Year => "%Y",
            Self::Month => "%m",
            Self::Day => "%d",
            Self::Time => "%H%M",
            Self::MonthDayYear => "%m%d%Y",
        }
    }
}

/// How the updated timestamp is written back to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `yyyy-MM-dd`
    DateOnly,
    /// RFC 3339 with a `+00:00` offset.
    Offset,
    /// `yyyy-MM-ddTHH:mm:ss` without offset.
    Local,
}

const PART_UNKNOWN: u32 = 99;
const YEAR_UNKNOWN: i32 = 9999;

/// Parse a stored timestamp and normalize it to UTC.
///
/// Accepts RFC 3339, a local timestamp (treated as UTC) and a bare date.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc).naive_utc());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Extract one component, or `width` spaces when nothing usable is stored.
pub fn get_part(stored: Option<&str>, part: DatePart, width: usize) -> String {
    match stored.and_then(parse_timestamp) {
        Some(timestamp) => timestamp.format(part.pattern()).to_string(),
        None => blank(width),
    }
}

/// Apply one component and return the new stored value.
///
/// Returns `None` when the value is too short to hold the component or when
/// no component could be applied, in which case the stored value must be
/// left alone.
pub fn set_part(
    stored: Option<&str>,
    part: DatePart,
    style: DateStyle,
    value: &str,
) -> Option<String> {
    if value.chars().count() < part.len() {
        return None;
    }
    let mut timestamp = stored
        .and_then(parse_timestamp)
        .unwrap_or_else(base_timestamp);

    let digits: String = value.chars().take(part.len()).collect();
    let (month, day, year, hour, minute) = match part {
        DatePart::Year => (None, None, number(&digits), None, None),
        DatePart::Month => (number(&digits), None, None, None, None),
        DatePart::Day => (None, number(&digits), None, None, None),
        DatePart::Time => (
            None,
            None,
            None,
            number_at(&digits, 0..2),
            number_at(&digits, 2..4),
        ),
        DatePart::MonthDayYear => (
            number_at(&digits, 0..2),
            number_at(&digits, 2..4),
            number_at(&digits, 4..8),
            None,
            None,
        ),
    };
    let known = |component: Option<u32>| component.filter(|&n| n != PART_UNKNOWN);

    let mut applied = false;
    if let Some(month) = known(month) {
        applied |= step(with_month(timestamp, month), &mut timestamp);
    }
    if let Some(day) = known(day) {
        applied |= step(with_day(timestamp, day), &mut timestamp);
    }
    if let Some(year) = year.filter(|&y| y != YEAR_UNKNOWN) {
        applied |= step(with_year(timestamp, year), &mut timestamp);
    }
    if let Some(hour) = known(hour) {
        applied |= step(timestamp.with_hour(hour), &mut timestamp);
    }
    if let Some(minute) = known(minute) {
        applied |= step(timestamp.with_minute(minute), &mut timestamp);
    }
    applied.then(|| render(timestamp, style))
}

/// Replace `timestamp` when the component produced a valid one.
fn step(next: Option<NaiveDateTime>, timestamp: &mut NaiveDateTime) -> bool {
    match next {
        Some(next) => {
            *timestamp = next;
            true
        }
        None => false,
    }
}

fn base_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

fn number<T: std::str::FromStr>(digits: &str) -> Option<T> {
    digits.trim().parse().ok()
}

/// Parse `digits[range]`; non-ASCII input yields `None`.
fn number_at<T: std::str::FromStr>(digits: &str, range: std::ops::Range<usize>) -> Option<T> {
    digits.get(range).and_then(number)
}

fn with_year(timestamp: NaiveDateTime, year: i32) -> Option<NaiveDateTime> {
    if year < 1 {
        return None;
    }
    timestamp.with_year(year)
}

fn with_month(timestamp: NaiveDateTime, month: u32) -> Option<NaiveDateTime> {
    timestamp.with_month(month)
}

fn with_day(timestamp: NaiveDateTime, day: u32) -> Option<NaiveDateTime> {
    timestamp.with_day(day)
}

fn render(timestamp: NaiveDateTime, style: DateStyle) -> String {
    match style {
        DateStyle::DateOnly => timestamp.format("%Y-%m-%d").to_string(),
        DateStyle::Offset => timestamp
            .and_utc()
            .to_rfc3339_opts(SecondsFormat::Secs, false),
        DateStyle::Local => timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
    }
}
