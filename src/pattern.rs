use crate::{
    expression::{MAX_YEAR, MIN_YEAR},
    series::SeriesWithStep,
    utils, CronError, Result,
};
use std::collections::BTreeSet;

pub(crate) type PatternValueType = u16;

/// Kind of the cron expression field, in the order of the full seven-field form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Field {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
    Year,
}

impl Field {
    const DAYS_OF_WEEK: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
    const DAYS_OF_WEEK_FULL: [&str; 7] = [
        "SUNDAY",
        "MONDAY",
        "TUESDAY",
        "WEDNESDAY",
        "THURSDAY",
        "FRIDAY",
        "SATURDAY",
    ];
    const MONTHS: [&str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];
    const MONTHS_FULL: [&str; 12] = [
        "JANUARY",
        "FEBRUARY",
        "MARCH",
        "APRIL",
        "MAY",
        "JUNE",
        "JULY",
        "AUGUST",
        "SEPTEMBER",
        "OCTOBER",
        "NOVEMBER",
        "DECEMBER",
    ];

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day-of-month",
            Self::Month => "month",
            Self::DayOfWeek => "day-of-week",
            Self::Year => "year",
        }
    }

    /// Inclusive range of valid values.
    pub(crate) fn bounds(self) -> (PatternValueType, PatternValueType) {
        match self {
            Self::Second | Self::Minute => (0, 59),
            Self::Hour => (0, 23),
            Self::DayOfMonth => (1, 31),
            Self::Month => (1, 12),
            Self::DayOfWeek => (0, 6),
            Self::Year => (MIN_YEAR, MAX_YEAR),
        }
    }

    /// The value set of a wildcard.
    pub(crate) fn all_values(self) -> Vec<PatternValueType> {
        let (min, max) = self.bounds();
        (min..=max).collect()
    }

    /// Resolves single token (number or name) into the field value.
    ///
    /// Day of week accepts `7` as an alias of Sunday (`0`).
    pub(crate) fn lookup(self, token: &str) -> Option<PatternValueType> {
        let (min, max) = self.bounds();
        match self {
            Self::Year => utils::parse_digital_value(token, 4..=4, min, max),
            Self::Month => utils::parse_digital_value(token, 1..=2, min, max).or_else(|| {
                utils::parse_string_value(token, &Self::MONTHS)
                    .or_else(|| utils::parse_string_value(token, &Self::MONTHS_FULL))
                    .map(|v| v + 1)
            }),
            Self::DayOfWeek => utils::parse_digital_value(token, 1..=2, min, 7)
                .map(|v| v % 7)
                .or_else(|| utils::parse_string_value(token, &Self::DAYS_OF_WEEK))
                .or_else(|| utils::parse_string_value(token, &Self::DAYS_OF_WEEK_FULL)),
            _ => utils::parse_digital_value(token, 1..=2, min, max),
        }
    }

    pub(crate) fn syntax_error(self, text: impl Into<String>) -> CronError {
        CronError::SyntaxError {
            field: self.name(),
            text: text.into(),
        }
    }

    pub(crate) fn invalid_interval(self, text: impl Into<String>) -> CronError {
        CronError::InvalidInterval {
            field: self.name(),
            text: text.into(),
        }
    }
}

/// Single comma-separated entry of the field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Directive {
    /// `*` or `?`
    All,
    One(PatternValueType),
    /// `first-last/step`, wraps through the field maximum if `first > last`.
    Span {
        first: PatternValueType,
        last: PatternValueType,
        step: PatternValueType,
    },
    /// Raw entry text, which may be a special modifier of the day fields.
    Unrecognized(String),
}

impl Directive {
    fn parse(field: Field, entry: &str) -> Result<Self> {
        let lowered = entry.to_ascii_lowercase();
        let (base, step) = match lowered.split_once('/') {
            Some((base, step)) if !step.is_empty() && step.bytes().all(|b| b.is_ascii_digit()) => (base, Some(step)),
            Some(_) => return Ok(Self::Unrecognized(entry.to_owned())),
            None => (lowered.as_str(), None),
        };

        let (min, max) = field.bounds();
        let (first, last) = if base == "*" {
            (min, max)
        } else if base == "?" {
            if step.is_some() {
                return Ok(Self::Unrecognized(entry.to_owned()));
            }
            (min, max)
        } else if let Some((first, last)) = base.split_once('-') {
            match (field.lookup(first), field.lookup(last)) {
                (Some(first), Some(last)) => (first, last),
                _ => return Ok(Self::Unrecognized(entry.to_owned())),
            }
        } else {
            match field.lookup(base) {
                Some(value) if step.is_none() => return Ok(Self::One(value)),
                Some(value) => (value, max),
                None => return Ok(Self::Unrecognized(entry.to_owned())),
            }
        };

        let step = match step {
            None if base == "*" || base == "?" => return Ok(Self::All),
            None => 1,
            Some(step) => match step.parse::<PatternValueType>() {
                Ok(step) if step >= 1 && step <= max => step,
                _ => return Err(field.invalid_interval(entry)),
            },
        };

        Ok(Self::Span { first, last, step })
    }

    /// Adds values of the directive to the set.
    pub(crate) fn expand(&self, field: Field, values: &mut BTreeSet<PatternValueType>) {
        let (min, max) = field.bounds();
        match self {
            Self::All => values.extend(field.all_values()),
            Self::One(value) => {
                values.insert(*value);
            }
            Self::Span { first, last, step } if first <= last => {
                values.extend(SeriesWithStep::new(*first, *last, *step));
            }
            Self::Span { first, last, step } => {
                values.extend(SeriesWithStep::new(*first, max, *step));
                values.extend(SeriesWithStep::new(min, *last, *step));
            }
            Self::Unrecognized(_) => {}
        }
    }
}

/// Splits field into directives, empty entries are skipped.
pub(crate) fn parse_directives(field: Field, input: &str) -> Result<Vec<Directive>> {
    let directives = input
        .split(',')
        .filter(|entry| !entry.is_empty())
        .map(|entry| Directive::parse(field, entry))
        .collect::<Result<Vec<_>>>()?;

    if directives.is_empty() {
        Err(field.syntax_error(input))
    } else {
        Ok(directives)
    }
}

/// `true` if the field is a single wildcard without anything else.
#[inline]
pub(crate) fn is_bare_wildcard(directives: &[Directive]) -> bool {
    matches!(directives, [Directive::All])
}

/// Parses field without special modifiers into the sorted list of values.
pub(crate) fn parse_field(field: Field, input: &str) -> Result<Vec<PatternValueType>> {
    let directives = parse_directives(field, input)?;

    if let Some(Directive::Unrecognized(text)) = directives.iter().find(|d| matches!(d, Directive::Unrecognized(_))) {
        return Err(field.syntax_error(text.as_str()));
    }
    if directives.contains(&Directive::All) {
        return Ok(field.all_values());
    }

    let mut values = BTreeSet::new();
    for directive in &directives {
        directive.expand(field, &mut values);
    }
    Ok(values.into_iter().collect())
}
