use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_DAY, MAX_HOUR, MAX_MINUTE, MAX_MONTH, MAX_SECOND, MAX_YEAR, MIN_DAY,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A calendar or clock value outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ValueError {
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid hour: {} (must be 0-{})", "_0", MAX_HOUR)]
    InvalidHour(u8),
    #[display(fmt = "Invalid minute: {} (must be 0-{})", "_0", MAX_MINUTE)]
    InvalidMinute(u8),
    #[display(fmt = "Invalid second: {} (must be 0-{})", "_0", MAX_SECOND)]
    InvalidSecond(u8),
}

impl std::error::Error for ValueError {}

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ValueError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ValueError> {
        let non_zero = NonZeroU16::new(value).ok_or(ValueError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ValueError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = ValueError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ValueError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        let non_zero = NonZeroU8::new(value).ok_or(ValueError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ValueError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ValueError::InvalidDay` if the value is 0 or invalid for the given year and month,
    /// and `ValueError::InvalidMonth` if the month itself is out of range.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ValueError> {
        let invalid = ValueError::InvalidDay {
            month,
            day: value,
            year,
        };
        let non_zero = NonZeroU8::new(value).ok_or(invalid)?;

        if value > days_in_month(year, Month::new(month)?) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so check against the longest month
        if !(MIN_DAY..=MAX_DAY).contains(&value) {
            return Err(ValueError::InvalidDay {
                month: 0,
                day: value,
                year: 0,
            });
        }
        NonZeroU8::new(value).map(Self).ok_or(ValueError::InvalidDay {
            month: 0,
            day: value,
            year: 0,
        })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Generates a zero-based clock field (`0..=$max`) with the same surface as the
/// calendar types above.
macro_rules! clock_field {
    ($(#[$meta:meta])* $name:ident, $max:expr, $err:path) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
        )]
        #[display(fmt = "{:02}", "_0")]
        #[serde(try_from = "u8", into = "u8")]
        pub struct $name(u8);

        impl $name {
            #[doc = concat!("Creates a new ", stringify!($name), ", validating that it's <= `", stringify!($max), "`")]
            ///
            /// # Errors
            #[doc = concat!("Returns `", stringify!($err), "` if the value is out of range.")]
            pub const fn new(value: u8) -> Result<Self, ValueError> {
                if value > $max {
                    return Err($err(value));
                }
                Ok(Self(value))
            }

            #[inline]
            pub const fn get(self) -> u8 {
                self.0
            }
        }

        impl TryFrom<u8> for $name {
            type Error = ValueError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

clock_field!(
    /// An hour on a 24-hour clock, `0..=MAX_HOUR`
    Hour,
    MAX_HOUR,
    ValueError::InvalidHour
);
clock_field!(
    /// A minute, `0..=MAX_MINUTE`
    Minute,
    MAX_MINUTE,
    ValueError::InvalidMinute
);
clock_field!(
    /// A second, `0..=MAX_SECOND`
    Second,
    MAX_SECOND,
    ValueError::InvalidSecond
);

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: Month) -> u8 {
    let month = month.get();
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(m: u8) -> Month {
        Month::new(m).unwrap()
    }

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(ValueError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(ValueError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_year_display_is_four_digits() {
        assert_eq!(Year::new(2024).unwrap().to_string(), "2024");
        assert_eq!(Year::new(7).unwrap().to_string(), "0007");
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ValueError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ValueError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_display_is_padded() {
        assert_eq!(month(8).to_string(), "08");
        assert_eq!(month(12).to_string(), "12");
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, 2024, 1).is_ok());
        assert!(Day::new(31, 2024, 1).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, 2023, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(30, 2024, 2).is_err());

        // April - 30 days
        assert!(Day::new(30, 2024, 4).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(
            Day::new(0, 2024, 1),
            Err(ValueError::InvalidDay { .. })
        ));
        assert!(matches!(
            Day::new(32, 2024, 1),
            Err(ValueError::InvalidDay {
                month: 1,
                day: 32,
                year: 2024
            })
        ));
        assert!(matches!(
            Day::new(1, 2024, 13),
            Err(ValueError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        assert!(Day::try_from(0).is_err());
        assert!(Day::try_from(32).is_err());
    }

    #[test]
    fn test_clock_fields_bounds() {
        struct TestCase {
            value:  u8,
            hour:   bool,
            minute: bool,
            second: bool,
        }

        let cases = [
            TestCase {
                value:  0,
                hour:   true,
                minute: true,
                second: true,
            },
            TestCase {
                value:  23,
                hour:   true,
                minute: true,
                second: true,
            },
            TestCase {
                value:  24,
                hour:   false,
                minute: true,
                second: true,
            },
            TestCase {
                value:  59,
                hour:   false,
                minute: true,
                second: true,
            },
            TestCase {
                value:  60,
                hour:   false,
                minute: false,
                second: false,
            },
        ];

        for case in &cases {
            assert_eq!(Hour::new(case.value).is_ok(), case.hour, "hour {}", case.value);
            assert_eq!(
                Minute::new(case.value).is_ok(),
                case.minute,
                "minute {}",
                case.value
            );
            assert_eq!(
                Second::new(case.value).is_ok(),
                case.second,
                "second {}",
                case.value
            );
        }
    }

    #[test]
    fn test_clock_field_errors() {
        assert_eq!(Hour::new(24), Err(ValueError::InvalidHour(24)));
        assert_eq!(Minute::new(60), Err(ValueError::InvalidMinute(60)));
        assert_eq!(Second::new(99), Err(ValueError::InvalidSecond(99)));
        assert_eq!(
            ValueError::InvalidHour(24).to_string(),
            "Invalid hour: 24 (must be 0-23)"
        );
    }

    #[test]
    fn test_clock_field_display_and_serde() {
        let minute = Minute::new(5).unwrap();
        assert_eq!(minute.to_string(), "05");
        assert_eq!(serde_json::to_string(&minute).unwrap(), "5");

        let hour: Hour = serde_json::from_str("13").unwrap();
        assert_eq!(hour.get(), 13);
        assert!(serde_json::from_str::<Hour>("24").is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        for (year, leap) in [
            (2020, true),
            (2023, false),
            (1900, false),
            (2100, false),
            (2000, true),
            (2400, true),
        ] {
            assert_eq!(is_leap_year(year), leap, "year {year}");
        }
        assert!(Year::new(2024).unwrap().is_leap());
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for m in 1..=12 {
            assert_eq!(
                days_in_month(2023, month(m)),
                expected[m as usize],
                "Month {m} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, month(2)), 29);
    }
}
