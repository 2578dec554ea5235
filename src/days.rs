use crate::{
    pattern::{self, Directive, Field, PatternValueType},
    series::SeriesWithStep,
    utils, Result,
};
use std::collections::BTreeSet;

/// Parsed day-of-month field with its special modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct DaysOfMonth {
    /// Plain days.
    pub(crate) days: Vec<PatternValueType>,
    /// Days of `NW` entries.
    pub(crate) nearest_weekdays: Vec<PatternValueType>,
    /// `L`
    pub(crate) last_day: bool,
    /// `LW`
    pub(crate) last_weekday: bool,
    pub(crate) restricted: bool,
}

impl DaysOfMonth {
    pub(crate) fn parse(input: &str) -> Result<Self> {
        let field = Field::DayOfMonth;
        let directives = pattern::parse_directives(field, input)?;

        let mut days = BTreeSet::new();
        let mut nearest_weekdays = BTreeSet::new();
        let mut last_day = false;
        let mut last_weekday = false;

        for directive in &directives {
            let Directive::Unrecognized(text) = directive else {
                directive.expand(field, &mut days);
                continue;
            };

            let lowered = text.to_ascii_lowercase();
            if lowered == "l" {
                last_day = true;
            } else if lowered == "lw" {
                last_weekday = true;
            } else if let Some(day) = lowered.strip_suffix('w').and_then(|day| field.lookup(day)) {
                nearest_weekdays.insert(day);
            } else {
                return Err(field.syntax_error(text.as_str()));
            }
        }

        Ok(Self {
            days: days.into_iter().collect(),
            nearest_weekdays: nearest_weekdays.into_iter().collect(),
            last_day,
            last_weekday,
            restricted: !pattern::is_bare_wildcard(&directives),
        })
    }
}

/// Parsed day-of-week field with its special modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct DaysOfWeek {
    /// Plain weekdays, `0` is Sunday.
    pub(crate) days: Vec<PatternValueType>,
    /// Weekdays of `NL` entries.
    pub(crate) last: Vec<PatternValueType>,
    /// `W#N` entries encoded as `(N - 1) * 7 + W`.
    pub(crate) nth: Vec<PatternValueType>,
    pub(crate) restricted: bool,
}

impl DaysOfWeek {
    pub(crate) fn parse(input: &str) -> Result<Self> {
        let field = Field::DayOfWeek;
        let directives = pattern::parse_directives(field, input)?;

        let mut days = BTreeSet::new();
        let mut last = BTreeSet::new();
        let mut nth = BTreeSet::new();

        for directive in &directives {
            let Directive::Unrecognized(text) = directive else {
                directive.expand(field, &mut days);
                continue;
            };

            let lowered = text.to_ascii_lowercase();
            if let Some(dow) = lowered.strip_suffix('l').and_then(|dow| field.lookup(dow)) {
                last.insert(dow);
            } else if let Some((dow, n)) = lowered
                .split_once('#')
                .and_then(|(dow, n)| Some((field.lookup(dow)?, utils::parse_digital_value(n, 1..=1, 1, 5)?)))
            {
                nth.insert((n - 1) * 7 + dow);
            } else {
                return Err(field.syntax_error(text.as_str()));
            }
        }

        Ok(Self {
            days: days.into_iter().collect(),
            last: last.into_iter().collect(),
            nth: nth.into_iter().collect(),
            restricted: !pattern::is_bare_wildcard(&directives),
        })
    }
}

/// Calculates sorted list of days in the month, eligible by either of the day fields.
pub(crate) fn actual_days(
    year: i32,
    month: PatternValueType,
    dom: &DaysOfMonth,
    dow: &DaysOfWeek,
) -> Vec<PatternValueType> {
    let last_day = utils::days_in_month(year, month);

    if !dom.restricted && !dow.restricted {
        return (1..=last_day).collect();
    }

    let mut days = BTreeSet::new();

    if dom.restricted {
        if dom.last_day {
            days.insert(last_day);
        }
        if dom.last_weekday {
            days.insert(utils::nearest_weekday(year, month, last_day));
        }
        days.extend(dom.days.iter().copied().filter(|day| *day <= last_day));
        days.extend(
            dom.nearest_weekdays
                .iter()
                .filter(|day| **day <= last_day)
                .map(|day| utils::nearest_weekday(year, month, *day)),
        );
    }

    if dow.restricted {
        for weekday in &dow.days {
            days.extend(SeriesWithStep::new(utils::first_dow(year, month, *weekday), last_day, 7));
        }
        days.extend(
            dow.nth
                .iter()
                .filter_map(|nth| utils::nth_dow(year, month, nth % 7, nth / 7 + 1)),
        );
        days.extend(dow.last.iter().map(|weekday| utils::last_dow(year, month, *weekday)));
    }

    days.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CronError;
    use rstest::rstest;

    fn syntax_error(field: &'static str, text: &str) -> CronError {
        CronError::SyntaxError {
            field,
            text: text.to_owned(),
        }
    }

    #[test]
    fn test_days_of_month_modifiers() {
        let dom = DaysOfMonth::parse("l,Lw,15w,3,1-2,03W").unwrap();

        assert_eq!(dom.days, vec![1, 2, 3]);
        assert_eq!(dom.nearest_weekdays, vec![3, 15]);
        assert!(dom.last_day);
        assert!(dom.last_weekday);
        assert!(dom.restricted);
    }

    #[rstest]
    #[case("*", false)]
    #[case("?", false)]
    #[case("*,*", true)]
    #[case("*/1", true)]
    #[case("1-31", true)]
    #[case("L", true)]
    fn test_days_of_month_restricted(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(DaysOfMonth::parse(input).unwrap().restricted, expected, "input = {input}");
    }

    #[rstest]
    #[case("W", "W")]
    #[case("32W", "32W")]
    #[case("0W", "0W")]
    #[case("L3", "L3")]
    #[case("1,LL", "LL")]
    #[case("5#1", "5#1")]
    fn test_days_of_month_syntax_error(#[case] input: &str, #[case] text: &str) {
        assert_eq!(DaysOfMonth::parse(input), Err(syntax_error("day-of-month", text)));
    }

    #[test]
    fn test_days_of_week_modifiers() {
        let dow = DaysOfWeek::parse("fri#1,5L,7l,sat#5,7#2,mon-wed").unwrap();

        assert_eq!(dow.days, vec![1, 2, 3]);
        assert_eq!(dow.last, vec![0, 5]);
        assert_eq!(dow.nth, vec![5, 7, 34]);
        assert!(dow.restricted);
    }

    #[rstest]
    #[case("*", false)]
    #[case("?", false)]
    #[case("0-6", true)]
    #[case("1#1", true)]
    fn test_days_of_week_restricted(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(DaysOfWeek::parse(input).unwrap().restricted, expected, "input = {input}");
    }

    #[rstest]
    #[case("L", "L")]
    #[case("8L", "8L")]
    #[case("1#0", "1#0")]
    #[case("1#6", "1#6")]
    #[case("1#", "1#")]
    #[case("#1", "#1")]
    #[case("15W", "15W")]
    fn test_days_of_week_syntax_error(#[case] input: &str, #[case] text: &str) {
        assert_eq!(DaysOfWeek::parse(input), Err(syntax_error("day-of-week", text)));
    }

    #[rstest]
    #[case("*", "*", 2024, 2, (1..=29).collect())]
    #[case("?", "*", 2023, 2, (1..=28).collect())]
    #[case("L", "*", 2016, 2, vec![29])]
    #[case("L", "?", 2024, 4, vec![30])]
    #[case("LW", "*", 2024, 3, vec![29])]
    #[case("LW", "*", 2024, 8, vec![30])]
    #[case("30,31", "*", 2024, 4, vec![30])]
    #[case("14W", "*", 2013, 9, vec![13])]
    #[case("14W", "*", 2013, 4, vec![15])]
    #[case("1W", "*", 2024, 6, vec![3])]
    #[case("31W", "*", 2024, 2, vec![])]
    #[case("*", "MON", 2024, 1, vec![1, 8, 15, 22, 29])]
    #[case("*", "6,0", 2024, 1, vec![6, 7, 13, 14, 20, 21, 27, 28])]
    #[case("*", "6#5", 2013, 11, vec![30])]
    #[case("*", "6#5", 2013, 10, vec![])]
    #[case("*", "1#1", 2024, 1, vec![1])]
    #[case("*", "5L", 2024, 1, vec![26])]
    #[case("*", "4L", 2024, 2, vec![29])]
    #[case("1", "MON", 2024, 1, vec![1, 8, 15, 22, 29])]
    #[case("1", "MON", 2024, 2, vec![1, 5, 12, 19, 26])]
    #[case("L", "0L", 2023, 12, vec![31])]
    fn test_actual_days(
        #[case] dom: &str,
        #[case] dow: &str,
        #[case] year: i32,
        #[case] month: PatternValueType,
        #[case] expected: Vec<PatternValueType>,
    ) {
        let dom = DaysOfMonth::parse(dom).unwrap();
        let dow = DaysOfWeek::parse(dow).unwrap();

        assert_eq!(actual_days(year, month, &dom, &dow), expected, "{year}-{month:02}");
    }
}
