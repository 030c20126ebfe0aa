use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::core::Cell;

/// Day serial of 1970-01-01 in spreadsheet (1900 date system) numbering.
pub const SERIAL_EPOCH_OFFSET: f64 = 25_569.0;
/// Milliseconds per day used for serial conversion.
pub const MS_PER_DAY: f64 = 86_400_000.0;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %B %Y",
    "%B %d, %Y",
];
/// Smallest numeric text read as a day serial (1927-05-18). Shorter
/// numbers such as `"2024"` look like years and are not reinterpreted.
pub const MIN_TEXT_SERIAL: f64 = 10_000.0;

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Normalize a date cell to `YYYY-MM-DD`.
///
/// Accepts native dates, date-like text and day-serial numbers. Serials are
/// converted as UTC epoch milliseconds with no timezone correction, so a
/// serial always lands on its UTC calendar day. Numeric text is read as a
/// serial only from [`MIN_TEXT_SERIAL`] up; below that (`"2024"`) it is
/// unrecognized. Anything unrecognized yields `""`.
pub fn format_date(raw: &Cell) -> String {
    parse_date(raw)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parse a date cell without formatting it.
pub fn parse_date(raw: &Cell) -> Option<NaiveDate> {
    match raw {
        Cell::Date(d) => Some(*d),
        Cell::Number(serial) => from_serial(*serial),
        Cell::Text(s) => parse_date_text(s.trim()),
        Cell::Empty | Cell::Bool(_) => None,
    }
}

/// Convert a spreadsheet day serial (e.g. 45292 for 2024-01-01).
pub fn from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let millis = (serial - SERIAL_EPOCH_OFFSET) * MS_PER_DAY;
    if millis.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64).map(|dt| dt.date_naive())
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    if let Ok(serial) = s.parse::<f64>() {
        if serial < MIN_TEXT_SERIAL {
            tracing::debug!(value = s, "numeric date text below serial range, ignoring");
            return None;
        }
        tracing::debug!(value = s, "reading numeric date text as a day serial");
        return from_serial(serial);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok().map(|dt| dt.date()))
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
        })
}
