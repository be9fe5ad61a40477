// dataclean-core/src/domain/recency.rs
//
// Display projection of real timestamps ("10 minutes ago").

use chrono::{DateTime, NaiveDateTime, Utc};

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// Formats `at` relative to `now`, flooring to whole minutes, hours or days.
///
/// Thresholds: under 60 minutes reports minutes, under 24 hours reports hours,
/// anything older reports days. Timestamps in the future collapse to "just now".
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = now.signed_duration_since(at).num_minutes();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < MINUTES_PER_HOUR {
        pluralize(minutes, "minute")
    } else if minutes < MINUTES_PER_DAY {
        pluralize(minutes / MINUTES_PER_HOUR, "hour")
    } else {
        pluralize(minutes / MINUTES_PER_DAY, "day")
    }
}

/// Parses ISO-8601 timestamps. Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 5, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_minutes_below_one_hour() {
        assert_eq!(format_relative(now() - Duration::minutes(10), now()), "10 minutes ago");
        assert_eq!(format_relative(now() - Duration::minutes(59), now()), "59 minutes ago");
        assert_eq!(format_relative(now() - Duration::minutes(1), now()), "1 minute ago");
    }

    #[test]
    fn test_ninety_minutes_floors_to_one_hour() {
        assert_eq!(format_relative(now() - Duration::minutes(90), now()), "1 hour ago");
    }

    #[test]
    fn test_hour_and_day_thresholds() {
        assert_eq!(format_relative(now() - Duration::minutes(60), now()), "1 hour ago");
        assert_eq!(format_relative(now() - Duration::hours(23), now()), "23 hours ago");
        assert_eq!(format_relative(now() - Duration::hours(24), now()), "1 day ago");
        assert_eq!(format_relative(now() - Duration::days(2), now()), "2 days ago");
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = Utc.with_ymd_and_hms(2025, 12, 5, 14, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2025-12-05T14:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-12-05T15:30:00+01:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-12-05T14:30:00.000000"), Some(expected));
        assert_eq!(parse_timestamp("2025-12-05 14:30:00"), Some(expected));
        assert_eq!(parse_timestamp("10 minutes ago"), None);
    }

    #[test]
    fn test_recent_and_future_are_just_now() {
        assert_eq!(format_relative(now() - Duration::seconds(30), now()), "just now");
        assert_eq!(format_relative(now() + Duration::minutes(5), now()), "just now");
    }
}
