use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    AlarmTime, DateTime, HELP_TEXT, KW_ALARM, KW_DATETIME, KW_GET, KW_HELP, KW_OFF, KW_ON, KW_SET,
    MAX_TOKENS, ValueError,
};

/// Number of values after `set datetime`
const DATETIME_ARGS: usize = 6;
/// Number of values after `set alarm` when it sets the time
const ALARM_TIME_ARGS: usize = 2;

/// A console line turned into something the firmware can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `set datetime YYYY MM DD HH MM SS`
    SetDatetime(DateTime),
    /// `set alarm on|off`
    SetAlarmToggle(bool),
    /// `set alarm HH MM`
    SetAlarmTime(AlarmTime),
    /// `get datetime`
    GetDatetime,
    /// `get alarm`
    GetAlarm,
    /// `help`
    Help,
    /// Anything that does not name a command; callers usually answer with the help text.
    Unrecognized,
}

/// Error type for console lines that name a command but cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The line holds more tokens than the console accepts.
    #[error("Too many tokens: expected at most {max}, found {count}", max = MAX_TOKENS)]
    TooManyTokens { count: usize },

    /// Wrong number of arguments, or an argument that is not a valid value.
    #[error("Malformed arguments for '{command}': {reason}")]
    MalformedArguments {
        command: &'static str,
        reason:  String,
    },
}

impl CommandError {
    fn malformed(command: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedArguments {
            command,
            reason: reason.into(),
        }
    }

    fn out_of_range(command: &'static str, err: ValueError) -> Self {
        Self::malformed(command, err.to_string())
    }
}

/// The text to print in reply to `help` or an unrecognized line.
pub const fn help_text() -> &'static str {
    HELP_TEXT
}

/// Splits a console line on whitespace.
///
/// # Errors
/// Returns `CommandError::TooManyTokens` if the line has more than `MAX_TOKENS` tokens.
pub fn tokenize(line: &str) -> Result<Vec<&str>, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() > MAX_TOKENS {
        return Err(CommandError::TooManyTokens {
            count: tokens.len(),
        });
    }
    Ok(tokens)
}

/// Parses one console line.
///
/// Lines that do not start with a known command form yield `Command::Unrecognized`
/// rather than an error.
///
/// # Errors
/// Returns `CommandError::TooManyTokens` for lines longer than `MAX_TOKENS` tokens and
/// `CommandError::MalformedArguments` when a known command has the wrong arguments.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let result = tokenize(line).and_then(|tokens| dispatch(&tokens));
    match &result {
        Ok(Command::Unrecognized) => log::debug!("unrecognized console line {line:?}"),
        Ok(command) => log::debug!("console line {line:?} parsed as {command:?}"),
        Err(err) => log::warn!("rejected console line {line:?}: {err}"),
    }
    result
}

fn dispatch(tokens: &[&str]) -> Result<Command, CommandError> {
    match tokens {
        [KW_HELP, rest @ ..] => expect_no_args("help", rest).map(|()| Command::Help),
        [KW_SET, KW_DATETIME, args @ ..] => parse_set_datetime(args),
        [KW_SET, KW_ALARM, args @ ..] => parse_set_alarm(args),
        [KW_GET, KW_DATETIME, rest @ ..] => {
            expect_no_args("get datetime", rest).map(|()| Command::GetDatetime)
        },
        [KW_GET, KW_ALARM, rest @ ..] => expect_no_args("get alarm", rest).map(|()| Command::GetAlarm),
        _ => Ok(Command::Unrecognized),
    }
}

fn expect_no_args(command: &'static str, rest: &[&str]) -> Result<(), CommandError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(CommandError::malformed(
            command,
            format!("unexpected arguments: {}", rest.join(" ")),
        ))
    }
}

fn parse_set_datetime(args: &[&str]) -> Result<Command, CommandError> {
    const NAME: &str = "set datetime";

    let [year, month, day, hour, minute, second] = args else {
        return Err(CommandError::malformed(
            NAME,
            format!(
                "expected {DATETIME_ARGS} values (YYYY MM DD HH MM SS), found {}",
                args.len()
            ),
        ));
    };

    let datetime = DateTime::new(
        parse_u16(NAME, year)?,
        parse_u8(NAME, month)?,
        parse_u8(NAME, day)?,
        parse_u8(NAME, hour)?,
        parse_u8(NAME, minute)?,
        parse_u8(NAME, second)?,
    )
    .map_err(|e| CommandError::out_of_range(NAME, e))?;

    Ok(Command::SetDatetime(datetime))
}

fn parse_set_alarm(args: &[&str]) -> Result<Command, CommandError> {
    const NAME: &str = "set alarm";

    match args {
        [KW_ON] => Ok(Command::SetAlarmToggle(true)),
        [KW_OFF] => Ok(Command::SetAlarmToggle(false)),
        [KW_ON | KW_OFF, rest @ ..] => Err(CommandError::malformed(
            NAME,
            format!("unexpected arguments: {}", rest.join(" ")),
        )),
        [hour, minute] => {
            let alarm = AlarmTime::new(parse_u8(NAME, hour)?, parse_u8(NAME, minute)?)
                .map_err(|e| CommandError::out_of_range(NAME, e))?;
            Ok(Command::SetAlarmTime(alarm))
        },
        _ => Err(CommandError::malformed(
            NAME,
            format!(
                "expected '{KW_ON}', '{KW_OFF}' or {ALARM_TIME_ARGS} values (HH MM), found {}",
                args.len()
            ),
        )),
    }
}

/// Helper to parse u16 with better error messages
fn parse_u16(command: &'static str, s: &str) -> Result<u16, CommandError> {
    s.parse::<u16>()
        .map_err(|_| CommandError::malformed(command, format!("not a number: {s}")))
}

/// Helper to parse u8 with better error messages
fn parse_u8(command: &'static str, s: &str) -> Result<u8, CommandError> {
    s.parse::<u8>()
        .map_err(|_| CommandError::malformed(command, format!("not a number: {s}")))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Renders the canonical console line; `Unrecognized` renders as an empty line.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetDatetime(dt) => write!(
                f,
                "{KW_SET} {KW_DATETIME} {} {} {} {} {} {}",
                dt.year(),
                dt.month(),
                dt.day(),
                dt.hour(),
                dt.minute(),
                dt.second()
            ),
            Self::SetAlarmToggle(on) => {
                write!(f, "{KW_SET} {KW_ALARM} {}", if *on { KW_ON } else { KW_OFF })
            },
            Self::SetAlarmTime(alarm) => {
                write!(f, "{KW_SET} {KW_ALARM} {} {}", alarm.hour(), alarm.minute())
            },
            Self::GetDatetime => write!(f, "{KW_GET} {KW_DATETIME}"),
            Self::GetAlarm => write!(f, "{KW_GET} {KW_ALARM}"),
            Self::Help => f.write_str(KW_HELP),
            Self::Unrecognized => Ok(()),
        }
    }
}

impl Serialize for Command {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Command {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
