use crate::error::DateError;
use chrono::{DateTime, NaiveDate, NaiveTime};
use core::{
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};

/// The only layout dates are read and written in, as a chrono format string.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Byte length of a `YYYY/MM/DD` string.
const DATE_LEN: usize = 10;

/// A calendar date with no time of day and no timezone.
///
/// Dates are read from and rendered to the fixed layout `YYYY/MM/DD`. For arithmetic, a date is
/// treated as the instant of midnight UTC at its start.
///
/// ```
/// use gestimate::Date;
///
/// let date: Date = "2024/02/29".parse().unwrap();
/// assert_eq!("2024/02/29", date.to_string());
/// assert!("2023/02/29".parse::<Date>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Seconds since the Unix epoch at 00:00:00 UTC on this date.
    pub fn epoch_seconds(&self) -> i64 {
        self.0.and_time(NaiveTime::default()).and_utc().timestamp()
    }

    /// Returns the UTC date containing the instant `secs` seconds after the Unix epoch.
    ///
    /// Instants outside chrono's representable range saturate to [NaiveDate::MIN] or
    /// [NaiveDate::MAX].
    pub fn from_epoch_seconds(secs: i64) -> Self {
        let date = DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.date_naive())
            .unwrap_or(if secs < 0 {
                NaiveDate::MIN
            } else {
                NaiveDate::MAX
            });
        Self(date)
    }

    /// Like [Self::from_epoch_seconds], for a fractional instant. The time of day is discarded,
    /// so the result is always the start of the day containing `secs`, never a rounded-up day.
    pub fn from_fractional_epoch_seconds(secs: f64) -> Self {
        // `as` saturates on overflow and maps NaN to zero
        Self::from_epoch_seconds(secs.floor() as i64)
    }
}

/// Checks the fixed `YYYY/MM/DD` shape. chrono alone would also accept unpadded fields.
fn check_layout(s: &str) -> Result<(), &'static str> {
    let bytes = s.as_bytes();
    if bytes.len() != DATE_LEN {
        return Err("expected exactly 10 characters");
    }
    for (idx, byte) in bytes.iter().enumerate() {
        match idx {
            4 | 7 if *byte != b'/' => return Err("expected `/` between year, month and day"),
            4 | 7 => {}
            _ if !byte.is_ascii_digit() => return Err("expected only digits in year, month and day"),
            _ => {}
        }
    }
    Ok(())
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date string into a [Date]. The string must be in the format `YYYY/MM/DD`, where
    /// `YYYY` is the year zero-padded to 4 digits, `MM` is the month zero-padded to 2 digits, and
    /// `DD` is the day zero-padded to 2 digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| DateError::InvalidDateFormat {
            input: s.to_owned(),
            reason,
        };

        check_layout(s).map_err(|reason| invalid(reason.to_string()))?;
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|e| invalid(e.to_string()))
    }
}

impl Deref for Date {
    type Target = NaiveDate;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
