use serde::{Deserialize, Serialize};

use crate::{
    names::{self, LookupError},
    prelude::*,
    types::{Day, Hour, Minute, Month, Second, ValueError, Year},
    DAYS_PER_WEEK,
};

/// Month offsets for Sakamoto's day-of-week method
const WEEKDAY_MONTH_OFFSETS: [u16; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// A validated wall-clock date and time, as carried by `set datetime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{year}-{month}-{day} {hour}:{minute}:{second}")]
#[serde(try_from = "DateTimeFields")]
pub struct DateTime {
    year:   Year,
    month:  Month,
    day:    Day,
    hour:   Hour,
    minute: Minute,
    second: Second,
}

impl DateTime {
    /// Builds a datetime from raw numbers, checking every field.
    ///
    /// # Errors
    /// Returns the `ValueError` of the first field that is out of range. The day is
    /// checked against the length of the given month.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, ValueError> {
        Ok(Self {
            year:   Year::new(year)?,
            month:  Month::new(month)?,
            day:    Day::new(day, year, month)?,
            hour:   Hour::new(hour)?,
            minute: Minute::new(minute)?,
            second: Second::new(second)?,
        })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    pub const fn hour(&self) -> Hour {
        self.hour
    }

    pub const fn minute(&self) -> Minute {
        self.minute
    }

    pub const fn second(&self) -> Second {
        self.second
    }

    /// Day of the week, 0 = Sunday through 6 = Saturday.
    pub fn weekday(&self) -> u8 {
        let month = self.month.get();
        let year = self.year.get() - u16::from(month < 3);
        let offset = WEEKDAY_MONTH_OFFSETS[usize::from(month - 1)];
        let days = u32::from(year) + u32::from(year / 4) - u32::from(year / 100)
            + u32::from(year / 400)
            + u32::from(offset)
            + u32::from(self.day.get());
        // Always below DAYS_PER_WEEK, so the narrowing is lossless
        (days % u32::from(DAYS_PER_WEEK)) as u8
    }

    /// Three-letter weekday label for this date.
    ///
    /// # Errors
    /// Never fails in practice; the weekday is always in range.
    pub fn day_name(&self) -> Result<&'static str, LookupError> {
        names::day_name(usize::from(self.weekday()))
    }

    /// Three-letter month label for this date.
    ///
    /// # Errors
    /// Never fails in practice; the month is validated on construction.
    pub fn month_name(&self) -> Result<&'static str, LookupError> {
        names::month_name(usize::from(self.month.get()))
    }
}

/// Unchecked wire form of a `DateTime`.
#[derive(Deserialize)]
struct DateTimeFields {
    year:   u16,
    month:  u8,
    day:    u8,
    hour:   u8,
    minute: u8,
    second: u8,
}

impl TryFrom<DateTimeFields> for DateTime {
    type Error = ValueError;

    fn try_from(f: DateTimeFields) -> Result<Self, Self::Error> {
        Self::new(f.year, f.month, f.day, f.hour, f.minute, f.second)
    }
}

/// The daily alarm time, as carried by `set alarm HH MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{hour}:{minute}")]
pub struct AlarmTime {
    hour:   Hour,
    minute: Minute,
}

impl AlarmTime {
    /// # Errors
    /// Returns `ValueError::InvalidHour` or `ValueError::InvalidMinute` for out-of-range input.
    pub const fn new(hour: u8, minute: u8) -> Result<Self, ValueError> {
        let hour = match Hour::new(hour) {
            Ok(h) => h,
            Err(e) => return Err(e),
        };
        let minute = match Minute::new(minute) {
            Ok(m) => m,
            Err(e) => return Err(e),
        };
        Ok(Self { hour, minute })
    }

    pub const fn hour(&self) -> Hour {
        self.hour
    }

    pub const fn minute(&self) -> Minute {
        self.minute
    }
}
