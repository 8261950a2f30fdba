//! Three-letter labels shown on the LCD for weekdays and months.

use crate::{DAYS, MONTHS};

/// Error type for name table lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Index past the end of the table.
    #[error("Index {index} out of range (must be 0-{max})")]
    IndexOutOfRange { index: usize, max: usize },
}

fn lookup(table: &'static [&'static str], index: usize) -> Result<&'static str, LookupError> {
    table.get(index).copied().ok_or(LookupError::IndexOutOfRange {
        index,
        max: table.len().saturating_sub(1),
    })
}

/// Weekday label for `index`, 0 = "Sun" through 6 = "Sat".
///
/// # Errors
/// Returns `LookupError::IndexOutOfRange` for an index above 6.
pub fn day_name(index: usize) -> Result<&'static str, LookupError> {
    lookup(&DAYS, index)
}

/// Month label for `index`, 1 = "Jan" through 12 = "Dec".
/// Index 0 is the placeholder "xxx".
///
/// # Errors
/// Returns `LookupError::IndexOutOfRange` for an index above 12.
pub fn month_name(index: usize) -> Result<&'static str, LookupError> {
    lookup(&MONTHS, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_name_bounds() {
        assert_eq!(day_name(0), Ok("Sun"));
        assert_eq!(day_name(3), Ok("Wed"));
        assert_eq!(day_name(6), Ok("Sat"));
        assert_eq!(
            day_name(7),
            Err(LookupError::IndexOutOfRange { index: 7, max: 6 })
        );
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(0), Ok("xxx"));
        assert_eq!(month_name(1), Ok("Jan"));
        assert_eq!(month_name(12), Ok("Dec"));
        assert_eq!(
            month_name(13),
            Err(LookupError::IndexOutOfRange { index: 13, max: 12 })
        );
        assert!(month_name(usize::MAX).is_err());
    }

    #[test]
    fn test_labels_are_three_letters() {
        for name in DAYS.iter().chain(MONTHS.iter()) {
            assert_eq!(name.len(), 3, "{name}");
        }
    }

    #[test]
    fn test_error_message() {
        let err = day_name(9).unwrap_err();
        assert_eq!(err.to_string(), "Index 9 out of range (must be 0-6)");
    }
}
