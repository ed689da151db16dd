//! Date formatting for list views and chat timestamps.
//!
//! The backend hands timestamps around as epoch milliseconds or plain date
//! strings, and views render them in the local timezone with a
//! `YYYY-MM-DD HH:mm:ss`-style pattern. Absent or unparseable input renders
//! as an empty string — a bad timestamp must never take a table down.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Pattern used when callers do not pass one.
pub const DEFAULT_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";

/// A timestamp as it arrives from the backend.
#[derive(Clone, Debug, PartialEq)]
pub enum DateValue {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// RFC 3339, `YYYY-MM-DD HH:MM:SS`, or bare `YYYY-MM-DD`.
    Text(String),
}

/// Render a timestamp in local time, substituting the `YYYY`, `MM`, `DD`,
/// `HH`, `mm`, and `ss` tokens of `format`.
///
/// `None` renders as an empty string; an unparseable value renders as an
/// empty string and logs a warning.
#[must_use]
pub fn format_date(value: Option<&DateValue>, format: &str) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let Some(local) = to_local(value) else {
        log::warn!("invalid date: {value:?}");
        return String::new();
    };
    substitute(format, &local)
}

/// [`format_date`] with the default pattern.
#[must_use]
pub fn format_date_default(value: Option<&DateValue>) -> String {
    format_date(value, DEFAULT_FORMAT)
}

/// Render a timestamp relative to now (刚刚 / N分钟前 / ...), falling back
/// to `YYYY-MM-DD` beyond a month.
#[must_use]
pub fn format_relative_time(value: Option<&DateValue>) -> String {
    format_relative_time_at(value, Local::now())
}

fn format_relative_time_at(value: Option<&DateValue>, now: DateTime<Local>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let Some(local) = to_local(value) else {
        log::warn!("invalid date: {value:?}");
        return String::new();
    };

    let minute = 60_i64 * 1000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;

    let diff = now.timestamp_millis() - local.timestamp_millis();
    if diff < minute {
        "刚刚".to_owned()
    } else if diff < hour {
        format!("{}分钟前", diff / minute)
    } else if diff < day {
        format!("{}小时前", diff / hour)
    } else if diff < week {
        format!("{}天前", diff / day)
    } else if diff < month {
        format!("{}周前", diff / week)
    } else {
        substitute("YYYY-MM-DD", &local)
    }
}

fn to_local(value: &DateValue) -> Option<DateTime<Local>> {
    match value {
        DateValue::Millis(ms) => Local.timestamp_millis_opt(*ms).single(),
        DateValue::Text(text) => parse_text(text),
    }
}

fn parse_text(text: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Local.from_local_datetime(&naive).single();
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Local.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).single();
    }
    None
}

fn substitute(format: &str, local: &DateTime<Local>) -> String {
    use chrono::{Datelike, Timelike};

    format
        .replace("YYYY", &format!("{:04}", local.year()))
        .replace("MM", &format!("{:02}", local.month()))
        .replace("DD", &format!("{:02}", local.day()))
        .replace("HH", &format!("{:02}", local.hour()))
        .replace("mm", &format!("{:02}", local.minute()))
        .replace("ss", &format!("{:02}", local.second()))
}
