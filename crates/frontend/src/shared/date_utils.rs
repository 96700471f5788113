/// Date helpers shared by the list screens and the dashboard
///
/// Server timestamps are ISO 8601 strings; calendar days are taken in the browser's zone.
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};
use std::cmp::Ordering;

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format in the local zone
/// Example (UTC+3): "2024-03-15T14:02:26.123Z" -> "15.03.2024 17:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    format_datetime_in(datetime_str, local_offset)
}

pub fn format_datetime_in(datetime_str: &str, offset: ZoneOffset) -> String {
    const FORMAT: &str = "%d.%m.%Y %H:%M:%S";
    let value = datetime_str.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        let ts = ts.with_timezone(&Utc);
        return ts.with_timezone(&offset(ts)).format(FORMAT).to_string();
    }
    match parse_timestamp(value) {
        Some(ts) => ts.naive_utc().format(FORMAT).to_string(),
        None => datetime_str.to_string(),
    }
}

/// Format ISO date string to DD.MM.YYYY format, using the local calendar day
/// Example: "2024-03-15" or "2024-03-15T14:02:26" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    match calendar_day(date_str) {
        Some(day) => day.format("%d.%m.%Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Parse an RFC 3339 timestamp, a naive "YYYY-MM-DDTHH:MM:SS[.fff]" one, or a bare date
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// UTC offset in effect at a given instant
pub type ZoneOffset = fn(DateTime<Utc>) -> FixedOffset;

/// Local calendar day of a timestamp or date string
pub fn calendar_day(value: &str) -> Option<NaiveDate> {
    calendar_day_in(value, local_offset)
}

/// Calendar day of `value` in the zone given by `offset`.
///
/// Values that carry an offset are shifted into the zone; naive ones keep their own date.
pub fn calendar_day_in(value: &str, offset: ZoneOffset) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        let ts = ts.with_timezone(&Utc);
        return Some(ts.with_timezone(&offset(ts)).date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Value for `<input type="date">`
pub fn to_input_date(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// True when `value` is no older than `days` days before `now`; later timestamps count
pub fn within_days(value: &str, days: i64, now: DateTime<Utc>) -> bool {
    match parse_timestamp(value) {
        Some(ts) => ts >= now - Duration::days(days),
        None => false,
    }
}

/// Chronological order of two timestamps; unparseable values sort first
pub fn compare_timestamps(a: &str, b: &str) -> Ordering {
    match (parse_timestamp(a), parse_timestamp(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn now_utc() -> DateTime<Utc> {
    let millis = js_sys::Date::now() as i64;
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Browser zone offset at `at`
#[cfg(target_arch = "wasm32")]
pub fn local_offset(at: DateTime<Utc>) -> FixedOffset {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(at.timestamp_millis() as f64));
    // getTimezoneOffset is UTC minus local, in minutes
    let east = -(date.get_timezone_offset() as i32) * 60;
    FixedOffset::east_opt(east).unwrap_or_else(utc_offset)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_offset(at: DateTime<Utc>) -> FixedOffset {
    at.with_timezone(&chrono::Local).offset().fix()
}

pub fn utc_offset() -> FixedOffset {
    Utc.fix()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime_in("2024-03-15T14:02:26.123Z", |_| utc_offset()),
            "15.03.2024 14:02:26"
        );
        assert_eq!(
            format_datetime_in("2024-12-31T23:59:59Z", addis_ababa),
            "01.01.2025 02:59:59"
        );
        assert_eq!(format_datetime("2024-03-15T14:02:26"), "15.03.2024 14:02:26");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }

    fn addis_ababa(_: DateTime<Utc>) -> FixedOffset {
        FixedOffset::east_opt(3 * 3600).unwrap_or_else(utc_offset)
    }

    #[test]
    fn test_calendar_day_uses_local_zone() {
        let day = calendar_day_in("2024-02-01T22:30:00Z", addis_ababa).unwrap();
        assert_eq!(to_input_date(day), "2024-02-02");
        assert_eq!(
            calendar_day_in("2024-02-01T22:30:00Z", |_| utc_offset()),
            NaiveDate::from_ymd_opt(2024, 2, 1)
        );
    }

    #[test]
    fn test_naive_values_keep_their_date() {
        assert_eq!(
            calendar_day_in("2024-05-02T23:00:00", addis_ababa),
            NaiveDate::from_ymd_opt(2024, 5, 2)
        );
        assert_eq!(
            calendar_day_in("2024-05-02", addis_ababa),
            NaiveDate::from_ymd_opt(2024, 5, 2)
        );
    }

    #[test]
    fn test_within_days() {
        let now = parse_timestamp("2024-05-10T12:00:00Z").unwrap();
        assert!(within_days("2024-05-09T13:00:00Z", 1, now));
        assert!(!within_days("2024-05-08T12:00:00Z", 1, now));
        assert!(within_days("2024-05-04T12:00:00Z", 7, now));
        assert!(within_days("2024-05-11T12:00:00Z", 7, now));
        assert!(!within_days("garbage", 30, now));
    }

    #[test]
    fn test_compare_timestamps_mixed_forms() {
        assert_eq!(
            compare_timestamps("2024-01-02", "2024-01-01T23:00:00Z"),
            Ordering::Greater
        );
        assert_eq!(
            compare_timestamps("2024-01-01T10:00:00+02:00", "2024-01-01T08:00:00Z"),
            Ordering::Equal
        );
        assert_eq!(compare_timestamps("", "2024-01-01"), Ordering::Less);
    }
}
