//! Common utility functions.

use crate::pattern::PatternValueType;
use std::ops::RangeInclusive;

/// Converts string of ASCII digits into unsigned number with width and bounds validation.
pub(crate) fn parse_digital_value(
    input: &str,
    width: RangeInclusive<usize>,
    min: PatternValueType,
    max: PatternValueType,
) -> Option<PatternValueType> {
    if !width.contains(&input.len()) || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    input
        .parse::<PatternValueType>()
        .ok()
        .filter(|value| *value >= min && *value <= max)
}

/// Converts string with mnemonic value representation into unsigned number.
pub(crate) fn parse_string_value(input: &str, values: &[&str]) -> Option<PatternValueType> {
    if input.is_empty() {
        None
    } else {
        values
            .iter()
            .position(|x| x.eq_ignore_ascii_case(input))
            .map(|i| i as PatternValueType)
    }
}

/// Returns `true` if provided year is leap.
#[inline]
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns number of days in specified month, or zero for a month out of `1..=12`.
pub(crate) fn days_in_month(year: i32, month: PatternValueType) -> PatternValueType {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Calculates day of week (`0` is Sunday) for specified date.
///
/// Caller is responsible for the date validity.
pub(crate) fn day_of_week(year: i32, month: PatternValueType, day: PatternValueType) -> PatternValueType {
    debug_assert!((1..=12).contains(&month), "invalid month: {month}");

    let month_offset: i32 = if is_leap_year(year) {
        [0, 3, 4, 0, 2, 5, 0, 3, 6, 1, 4, 6]
    } else {
        [0, 3, 3, 6, 1, 4, 6, 2, 5, 0, 3, 5]
    }[(month as usize + 11) % 12];

    let year = year - 1;

    (day as i32 + month_offset + 5 * (year % 4) + 4 * (year % 100) + 6 * (year % 400)).rem_euclid(7)
        as PatternValueType
}

/// Returns day in the month of the first specified day of the week.
#[inline]
pub(crate) fn first_dow(year: i32, month: PatternValueType, dow: PatternValueType) -> PatternValueType {
    1 + (7 - day_of_week(year, month, 1) + dow) % 7
}

/// Returns day in the month of the specified N-th day of the week,
/// or `None` if the month is too short to have it.
pub(crate) fn nth_dow(
    year: i32,
    month: PatternValueType,
    dow: PatternValueType,
    n: PatternValueType,
) -> Option<PatternValueType> {
    if n == 0 {
        return None;
    }

    let day = first_dow(year, month, dow) + (n - 1) * 7;
    (day <= days_in_month(year, month)).then_some(day)
}

/// Returns day in the month for the last specified day of the week.
pub(crate) fn last_dow(year: i32, month: PatternValueType, dow: PatternValueType) -> PatternValueType {
    // first day of the final seven-day window
    let origin = days_in_month(year, month) - 6;
    origin + (7 - day_of_week(year, month, origin) + dow) % 7
}

/// Returns date of the weekday (not Sundays or Saturday) nearest to the specified date in the same month.
pub(crate) fn nearest_weekday(year: i32, month: PatternValueType, day: PatternValueType) -> PatternValueType {
    let last_day = days_in_month(year, month);

    match day_of_week(year, month, day) {
        // sunday
        0 if day < last_day => day + 1,
        0 => day - 2,
        // saturday
        6 if day > 1 => day - 1,
        6 => day + 2,
        _ => day,
    }
}
