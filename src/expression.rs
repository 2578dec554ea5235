use crate::{
    cursor::Cursor,
    days::{DaysOfMonth, DaysOfWeek},
    pattern::{self, Field, PatternValueType},
    CronError, Result,
};
use chrono::{DateTime, TimeZone};
use std::{fmt::Display, str::FromStr};

/// Minimum valid year.
pub const MIN_YEAR: u16 = 1970;
/// Maximum valid year.
pub const MAX_YEAR: u16 = 2099;

const MIN_FIELDS: usize = 5;
const MAX_FIELDS: usize = 7;

/// Represents parsed cron expression with its methods.
///
/// Expression is immutable, so it may be shared between threads freely:
/// every search of occurrences keeps its own state.
///
/// For cron expression clarification and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct Expression {
    normalized: String,
    pub(crate) seconds: Vec<PatternValueType>,
    pub(crate) minutes: Vec<PatternValueType>,
    pub(crate) hours: Vec<PatternValueType>,
    pub(crate) days: DaysOfMonth,
    pub(crate) months: Vec<PatternValueType>,
    pub(crate) weekdays: DaysOfWeek,
    pub(crate) years: Vec<PatternValueType>,
}

impl Expression {
    /// Parses and validates provided `text` and constructs [`Expression`] instance.
    ///
    /// Alternative way to construct [`Expression`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`CronError`] of the first invalid field, in the seven-field order.
    pub fn parse(text: &str) -> Result<Self> {
        let mut fields: Vec<&str> = text.split_whitespace().flat_map(Self::expand_alias).collect();

        match fields.len() {
            0..MIN_FIELDS => return Err(CronError::MissingFields(text.to_owned())),
            5 => {
                fields.insert(0, "0");
                fields.push("*");
            }
            6 => fields.push("*"),
            _ => fields.truncate(MAX_FIELDS),
        }

        let normalized = fields.join(" ");
        let expression = Self {
            seconds: pattern::parse_field(Field::Second, fields[0])?,
            minutes: pattern::parse_field(Field::Minute, fields[1])?,
            hours: pattern::parse_field(Field::Hour, fields[2])?,
            days: DaysOfMonth::parse(fields[3])?,
            months: pattern::parse_field(Field::Month, fields[4])?,
            weekdays: DaysOfWeek::parse(fields[5])?,
            years: pattern::parse_field(Field::Year, fields[6])?,
            normalized,
        };

        log::debug!("parsed cron expression {text:?} as {:?}", expression.normalized);
        Ok(expression)
    }

    /// Replaces well-known alias with the fields of its seven-field form.
    fn expand_alias(field: &str) -> Vec<&str> {
        let expanded = match field {
            "@yearly" | "@annually" => "0 0 0 1 1 * *",
            "@monthly" => "0 0 0 1 * * *",
            "@weekly" => "0 0 0 * * 0 *",
            "@daily" | "@midnight" => "0 0 0 * * * *",
            "@hourly" => "0 0 * * * * *",
            _ => field,
        };

        expanded.split(' ').collect()
    }

    /// Returns time of the next occurrence strictly after `from`.
    ///
    /// Fields are matched against the local date and time of `from`,
    /// and the result has the same timezone.
    /// Local time which doesn't exist in the timezone is skipped.
    ///
    /// Returns `None` if there are no more occurrences.
    #[inline]
    pub fn next<Tz: TimeZone>(&self, from: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        Cursor::new(self).next_after(from)
    }

    /// Returns up to `n` successive occurrences after `from`.
    ///
    /// The result is shorter than `n` if occurrences are over earlier.
    pub fn next_n<Tz: TimeZone>(&self, from: &DateTime<Tz>, n: usize) -> Vec<DateTime<Tz>> {
        self.iter(from).take(n).collect()
    }

    /// Returns iterator of occurrences after `from`.
    pub fn iter<Tz: TimeZone>(&self, from: &DateTime<Tz>) -> Occurrences<'_, Tz> {
        let mut cursor = Cursor::new(self);
        let next = cursor.next_after(from);
        Occurrences { cursor, next }
    }
}

/// Iterator of the [`Expression`] occurrences, see [`Expression::iter`].
#[derive(Debug, Clone)]
pub struct Occurrences<'a, Tz: TimeZone> {
    cursor: Cursor<'a>,
    next: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> Iterator for Occurrences<'_, Tz> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.cursor.next_after(&current);
        Some(current)
    }
}

impl From<Expression> for String {
    fn from(value: Expression) -> Self {
        value.normalized
    }
}

impl From<&Expression> for String {
    fn from(value: &Expression) -> Self {
        value.normalized.clone()
    }
}

impl TryFrom<String> for Expression {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl TryFrom<&String> for Expression {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Expression {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl FromStr for Expression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.normalized)
    }
}
