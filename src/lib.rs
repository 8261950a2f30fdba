//! Console command interpreter and static tables for a small LCD clock/alarm device.
//!
//! The firmware reads lines from its serial console and hands them to [`parse`],
//! which returns a typed [`Command`]. The crate also carries the device's fixed
//! data: weekday and month labels, the help text and the custom LCD glyphs.
//!
//! ```
//! use clock_console::{Command, parse};
//!
//! let command = parse("set alarm 13 30").unwrap();
//! assert_eq!(command.to_string(), "set alarm 13 30");
//! assert_eq!(parse("foo bar").unwrap(), Command::Unrecognized);
//! ```

mod command;
mod consts;
mod datetime;
mod glyph;
mod names;
mod prelude;
mod types;

pub use command::{Command, CommandError, help_text, parse, tokenize};
pub use consts::*;
pub use datetime::{AlarmTime, DateTime};
pub use glyph::{ALARM_ICON, ALIEN_1, ALIEN_2, BATTERY_ICON, Glyph, Icon};
pub use names::{LookupError, day_name, month_name};
pub use types::{Day, Hour, Minute, Month, Second, ValueError, Year, days_in_month, is_leap_year};
