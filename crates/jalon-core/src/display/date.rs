//! Date and timestamp display utilities.

use std::fmt;

use jiff::civil::Date;
use jiff::{tz::TimeZone, Timestamp};

/// Short French month names, indexed by `month - 1`.
const MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Wrapper that formats a calendar date the way the board displays it:
/// `9 juin 2024`.
pub struct FrenchDate<'a>(pub &'a Date);

impl fmt::Display for FrenchDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.0;
        let month = MONTHS_FR[usize::from(date.month().unsigned_abs()) - 1];
        write!(f, "{} {} {}", date.day(), month, date.year())
    }
}

/// Wrapper that formats a timestamp in the system time zone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
