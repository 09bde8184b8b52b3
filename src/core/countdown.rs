//! Countdown to the wedding day.
//!
//! The wedding date is stored as free text. A bare `YYYY-MM-DD` date means midnight
//! UTC on that day; full RFC 3339 timestamps and `YYYY-MM-DDTHH:MM[:SS]` (read as UTC)
//! are accepted too. Anything else, an empty string, or a date already past yields no
//! countdown.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

/// Time left until the wedding, split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    /// Whole days
    pub days: i64,
    /// Hours past the whole days, 0-23
    pub hours: i64,
    /// Minutes past the whole hours, 0-59
    pub minutes: i64,
}

impl Countdown {
    /// Splits a non-negative duration into days, hours and minutes.
    #[must_use]
    pub fn from_delta(delta: TimeDelta) -> Self {
        Self {
            days: delta.num_days(),
            hours: delta.num_hours() % 24,
            minutes: delta.num_minutes() % 60,
        }
    }
}

/// Parses a stored wedding date into an instant.
#[must_use]
pub fn parse_wedding_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.and_utc())
}

/// Countdown from `now` to the wedding date, or `None` if unset, unparseable or past.
#[must_use]
pub fn countdown_until(wedding_date: &str, now: DateTime<Utc>) -> Option<Countdown> {
    let target = parse_wedding_date(wedding_date)?;
    let delta = target - now;
    (delta >= TimeDelta::zero()).then(|| Countdown::from_delta(delta))
}

/// Countdown from the current wall-clock time.
#[must_use]
pub fn countdown_from_now(wedding_date: &str) -> Option<Countdown> {
    countdown_until(wedding_date, Utc::now())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn at(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_countdown_to_date() {
        let now = at("2026-06-01T10:30:00Z");

        let countdown = countdown_until("2026-06-11", now).unwrap();

        assert_eq!(
            countdown,
            Countdown {
                days: 9,
                hours: 13,
                minutes: 30
            }
        );
    }

    #[test]
    fn test_countdown_to_timestamp() {
        let now = at("2026-06-01T10:00:00Z");

        let countdown = countdown_until("2026-06-01T12:45:00+00:00", now).unwrap();
        assert_eq!(countdown.days, 0);
        assert_eq!(countdown.hours, 2);
        assert_eq!(countdown.minutes, 45);

        let local = countdown_until("2026-06-02T10:00", now).unwrap();
        assert_eq!(local.days, 1);
    }

    #[test]
    fn test_no_countdown() {
        let now = at("2026-06-01T10:00:00Z");

        assert_eq!(countdown_until("", now), None);
        assert_eq!(countdown_until("next summer", now), None);
        assert_eq!(countdown_until("2026-05-31", now), None);
    }

    #[test]
    fn test_wedding_moment_is_zero() {
        let now = at("2026-06-11T00:00:00Z");
        let countdown = countdown_until("2026-06-11", now).unwrap();
        assert_eq!(countdown, Countdown::from_delta(TimeDelta::zero()));
    }
}
