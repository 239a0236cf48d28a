use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const LABEL_FORMAT: &str = "%d %b";

/// Parse the date formats the app has written over time.
pub fn parse_date(date_str: &str) -> Result<NaiveDateTime> {
    // RFC3339 with a timezone offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Ok(dt.naive_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }

    if let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        return Ok(date.and_time(Default::default()));
    }

    anyhow::bail!("Failed to parse date: {}", date_str)
}

/// Short day-month label used in rating histories, e.g. "07 Mar".
///
/// Dates with an offset are labelled by the day as written, not the UTC day.
pub fn date_label(date_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return dt.naive_local().format(LABEL_FORMAT).to_string();
    }

    match parse_date(date_str) {
        Ok(dt) => dt.format(LABEL_FORMAT).to_string(),
        Err(_) => date_str.to_string(),
    }
}
