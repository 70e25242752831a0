//! Date facet normalization.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Accepted bare-date formats, tried in order after the timestamp forms.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Normalize a user-typed date to an RFC 3339 timestamp.
///
/// Accepts RFC 3339, `%Y-%m-%dT%H:%M:%S`, `%Y-%m-%d`, and `%Y/%m/%d`.
/// Bare dates become midnight UTC. Anything else is `None`.
///
/// # Examples
/// ```
/// use paymap_search::normalize_date;
/// assert_eq!(
///     normalize_date("2024-01-01").as_deref(),
///     Some("2024-01-01T00:00:00+00:00")
/// );
/// assert_eq!(normalize_date("soon"), None);
/// ```
pub fn normalize_date(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).to_rfc3339());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt).to_rfc3339());
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            let midnight = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&midnight).to_rfc3339());
        }
    }

    None
}
