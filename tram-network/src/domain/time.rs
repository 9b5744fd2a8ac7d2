//! Time-of-day handling for schedule entries.
//!
//! Schedules list departures as "HH:MM" strings with no date attached.
//! Differences are taken on minutes-of-day with no midnight rollover, so a
//! pair like "23:58" → "00:03" yields 1435 rather than 5.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day with minute resolution.
///
/// # Examples
///
/// ```
/// use tram_network::domain::ClockTime;
///
/// let t = ClockTime::parse_hhmm("08:05").unwrap();
/// assert_eq!(t.minutes_of_day(), 8 * 60 + 5);
/// assert_eq!(t.to_string(), "08:05");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parse a time from "HH:MM" format.
    ///
    /// ```
    /// use tram_network::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("8:05").is_err());
    /// assert!(ClockTime::parse_hhmm("08:05:00").is_err());
    /// assert!(ClockTime::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_of_day(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Absolute difference in minutes-of-day between two times.
    ///
    /// Symmetric and never negative. There is no notion of the next day: a
    /// later time followed by an earlier one is measured backwards.
    pub fn minutes_between(&self, other: ClockTime) -> u32 {
        self.minutes_of_day().abs_diff(other.minutes_of_day())
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        let time = t("00:00");
        assert_eq!(time.hour(), 0);
        assert_eq!(time.minute(), 0);

        let time = t("23:59");
        assert_eq!(time.hour(), 23);
        assert_eq!(time.minute(), 59);

        let time = t("14:30");
        assert_eq!(time.minutes_of_day(), 870);
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong length
        assert!(ClockTime::parse_hhmm("1430").is_err());
        assert!(ClockTime::parse_hhmm("14:3").is_err());
        assert!(ClockTime::parse_hhmm("14:300").is_err());
        assert!(ClockTime::parse_hhmm("").is_err());

        // Missing colon
        assert!(ClockTime::parse_hhmm("14-30").is_err());
        assert!(ClockTime::parse_hhmm("14.30").is_err());

        // Non-digits
        assert!(ClockTime::parse_hhmm("ab:cd").is_err());
        assert!(ClockTime::parse_hhmm("1a:30").is_err());
    }

    #[test]
    fn parse_out_of_range() {
        assert!(ClockTime::parse_hhmm("24:00").is_err());
        assert!(ClockTime::parse_hhmm("12:60").is_err());
        assert!(ClockTime::parse_hhmm("99:99").is_err());
    }

    #[test]
    fn error_message_names_reason() {
        let err = ClockTime::parse_hhmm("25:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid time: hour must be 0-23");
    }

    #[test]
    fn minutes_between_is_absolute() {
        assert_eq!(t("08:00").minutes_between(t("08:05")), 5);
        assert_eq!(t("08:05").minutes_between(t("08:00")), 5);
        assert_eq!(t("08:00").minutes_between(t("08:00")), 0);
    }

    #[test]
    fn minutes_between_ignores_midnight() {
        assert_eq!(t("23:58").minutes_between(t("00:03")), 1435);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(t("07:09").to_string(), "07:09");
        assert_eq!(format!("{:?}", t("07:09")), "ClockTime(07:09)");
    }
}
