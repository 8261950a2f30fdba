/// Maximum number of whitespace-separated tokens accepted on one console line
pub const MAX_TOKENS: usize = 8;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Days in the longest month
pub const MAX_DAY: u8 = 31;

/// Maximum valid hour on a 24-hour clock
pub const MAX_HOUR: u8 = 23;
/// Maximum valid minute
pub const MAX_MINUTE: u8 = 59;
/// Maximum valid second (no leap seconds)
pub const MAX_SECOND: u8 = 59;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Number of days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Three-letter weekday labels, Sunday first
pub const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Three-letter month labels (index 0 is a placeholder, months are 1-indexed)
pub const MONTHS: [&str; 13] = [
    "xxx", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Text printed on the console in reply to `help`
pub const HELP_TEXT: &str = r"
Available commands:

set datetime YYYY MM DD HH MM SS
  - Set the current datetime.
  - Example: set datetime 2000 12 31 12 59 36

set alarm on|off
  - Enable/disable alarm.
  - Example: set alarm on

set alarm HH MM
  - Set alarm time (24-hour format).
  - Example: set alarm 13 30

get datetime
  - Show current datetime.

get alarm
  - Show current alarm time.

help
  - Show this help message.
";

/// Console keywords
pub const KW_SET: &str = "set";
pub const KW_GET: &str = "get";
pub const KW_HELP: &str = "help";
pub const KW_DATETIME: &str = "datetime";
pub const KW_ALARM: &str = "alarm";
pub const KW_ON: &str = "on";
pub const KW_OFF: &str = "off";

/// Rows in a custom LCD character
pub const GLYPH_ROWS: usize = 8;
/// Significant pixel columns in each glyph row
pub const GLYPH_COLUMNS: usize = 5;
/// Mask of the significant bits in a glyph row
pub const GLYPH_ROW_MASK: u8 = 0b1_1111;
