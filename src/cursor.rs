use crate::{days, expression::Expression, pattern::PatternValueType};
use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Local calendar fields of an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Moment {
    pub(crate) year: i32,
    pub(crate) month: PatternValueType,
    pub(crate) day: PatternValueType,
    pub(crate) hour: PatternValueType,
    pub(crate) minute: PatternValueType,
    pub(crate) second: PatternValueType,
}

impl Moment {
    /// `0001-01-01 00:00:00`, never followed by an occurrence.
    const ZERO: Self = Self {
        year: 1,
        month: 1,
        day: 1,
        hour: 0,
        minute: 0,
        second: 0,
    };

    pub(crate) fn from_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> Self {
        Self {
            year: value.year(),
            month: value.month() as PatternValueType,
            day: value.day() as PatternValueType,
            hour: value.hour() as PatternValueType,
            minute: value.minute() as PatternValueType,
            second: value.second() as PatternValueType,
        }
    }

    /// Returns `None` if the local time doesn't exist in the timezone.
    /// Ambiguous local time resolves to the earliest instant.
    pub(crate) fn to_datetime<Tz: TimeZone>(self, tz: &Tz) -> Option<DateTime<Tz>> {
        tz.with_ymd_and_hms(
            self.year,
            self.month as u32,
            self.day as u32,
            self.hour as u32,
            self.minute as u32,
            self.second as u32,
        )
        .earliest()
    }

    /// Year as a field value, saturated to the value type.
    #[inline]
    fn year_value(&self) -> PatternValueType {
        self.year.clamp(0, PatternValueType::MAX as i32) as PatternValueType
    }
}

/// Field to move to its next value, with all finer fields reset to their first values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// Position of the value relative to the sorted list of allowed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    Match,
    /// The list has a greater value.
    Ahead,
    /// All values of the list are less.
    Exhausted,
}

fn probe(values: &[PatternValueType], current: PatternValueType) -> Probe {
    match values.get(values.partition_point(|v| *v < current)) {
        Some(v) if *v == current => Probe::Match,
        Some(_) => Probe::Ahead,
        None => Probe::Exhausted,
    }
}

/// The least value greater than `current`.
fn next_value(values: &[PatternValueType], current: PatternValueType) -> Option<PatternValueType> {
    values.get(values.partition_point(|v| *v <= current)).copied()
}

/// Eligible days of a single month.
#[derive(Debug, Clone)]
struct MonthDays {
    year: i32,
    month: PatternValueType,
    days: Vec<PatternValueType>,
}

/// State of a single occurrences search over an [`Expression`].
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    expression: &'a Expression,
    cache: Option<MonthDays>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(expression: &'a Expression) -> Self {
        Self {
            expression,
            cache: None,
        }
    }

    /// Returns the earliest occurrence strictly after `from`, in the same timezone.
    pub(crate) fn next_after<Tz: TimeZone>(&mut self, from: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let start = Moment::from_datetime(from);
        if start == Moment::ZERO && from.nanosecond() == 0 {
            return None;
        }

        let tz = from.timezone();
        let mut candidate = self.first_after(start)?;
        loop {
            match candidate.to_datetime(&tz) {
                Some(next) if next > *from => return Some(next),
                _ => candidate = self.advance(candidate, Step::Second)?,
            }
        }
    }

    /// Eligible days of the month, recalculated only when the month changes.
    fn days(&mut self, year: i32, month: PatternValueType) -> &[PatternValueType] {
        let expression = self.expression;
        let cache = match self.cache.take() {
            Some(cache) if cache.year == year && cache.month == month => cache,
            _ => MonthDays {
                year,
                month,
                days: days::actual_days(year, month, &expression.days, &expression.weekdays),
            },
        };

        &self.cache.insert(cache).days
    }

    /// The earliest matching moment strictly after `from`.
    pub(crate) fn first_after(&mut self, from: Moment) -> Option<Moment> {
        let expression = self.expression;

        match probe(&expression.years, from.year_value()) {
            Probe::Match => {}
            Probe::Ahead => return self.advance(from, Step::Year),
            Probe::Exhausted => {
                log::trace!("no more years in '{expression}' after {}", from.year);
                return None;
            }
        }

        let step = match probe(&expression.months, from.month) {
            Probe::Match => match probe(self.days(from.year, from.month), from.day) {
                Probe::Match => match probe(&expression.hours, from.hour) {
                    Probe::Match => match probe(&expression.minutes, from.minute) {
                        Probe::Match => match probe(&expression.seconds, from.second) {
                            Probe::Match | Probe::Ahead => Step::Second,
                            Probe::Exhausted => Step::Minute,
                        },
                        Probe::Ahead => Step::Minute,
                        Probe::Exhausted => Step::Hour,
                    },
                    Probe::Ahead => Step::Hour,
                    Probe::Exhausted => Step::Day,
                },
                Probe::Ahead => Step::Day,
                Probe::Exhausted => Step::Month,
            },
            Probe::Ahead => Step::Month,
            Probe::Exhausted => Step::Year,
        };

        self.advance(from, step)
    }

    /// Moves `at` to the next value of the `step` field, cascading to the coarser field
    /// when the current one has no more values.
    fn advance(&mut self, at: Moment, step: Step) -> Option<Moment> {
        let expression = self.expression;
        let mut at = at;
        let mut step = step;

        loop {
            step = match step {
                Step::Year => {
                    let Some(year) = next_value(&expression.years, at.year_value()) else {
                        log::trace!("no more years in '{expression}' after {}", at.year);
                        return None;
                    };
                    at.year = year as i32;
                    at.month = *expression.months.first()?;
                    match self.start_of_month(at.year, at.month) {
                        Some(start) => return Some(start),
                        None => Step::Month,
                    }
                }
                Step::Month => match next_value(&expression.months, at.month) {
                    Some(month) => {
                        at.month = month;
                        match self.start_of_month(at.year, at.month) {
                            Some(start) => return Some(start),
                            None => Step::Month,
                        }
                    }
                    None => Step::Year,
                },
                Step::Day => match next_value(self.days(at.year, at.month), at.day) {
                    Some(day) => {
                        return Some(Moment {
                            day,
                            hour: *expression.hours.first()?,
                            minute: *expression.minutes.first()?,
                            second: *expression.seconds.first()?,
                            ..at
                        })
                    }
                    None => Step::Month,
                },
                Step::Hour => match next_value(&expression.hours, at.hour) {
                    Some(hour) => {
                        return Some(Moment {
                            hour,
                            minute: *expression.minutes.first()?,
                            second: *expression.seconds.first()?,
                            ..at
                        })
                    }
                    None => Step::Day,
                },
                Step::Minute => match next_value(&expression.minutes, at.minute) {
                    Some(minute) => {
                        return Some(Moment {
                            minute,
                            second: *expression.seconds.first()?,
                            ..at
                        })
                    }
                    None => Step::Hour,
                },
                Step::Second => match next_value(&expression.seconds, at.second) {
                    Some(second) => return Some(Moment { second, ..at }),
                    None => Step::Minute,
                },
            };
        }
    }

    /// The first matching moment of the month, if the month has eligible days.
    fn start_of_month(&mut self, year: i32, month: PatternValueType) -> Option<Moment> {
        let expression = self.expression;
        let day = *self.days(year, month).first()?;

        Some(Moment {
            year,
            month,
            day,
            hour: *expression.hours.first()?,
            minute: *expression.minutes.first()?,
            second: *expression.seconds.first()?,
        })
    }
}
