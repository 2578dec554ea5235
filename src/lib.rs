//! Cron expressions parser and next-occurrence calculator.
#![deny(unsafe_code, warnings, missing_docs)]

//! This crate is intended to:
//! - parse cron expressions of five, six or seven fields, including `L`, `W`, `LW` and `#` modifiers;
//! - calculate the next occurrence (or a series of occurrences) of the expression after the provided time.
//!
//! _This is not a cron jobs scheduler or runner._ Nothing is executed or awaited here,
//! only time points are calculated.
//!
//! ## Cron expression format
//!
//! Traditionally, cron expression has a 5-fields format: minutes, hours, days, months and days of week.
//! This crate uses such a format by default, but two optional fields may be added, seconds and years:
//! - if _seconds_ is absent, `0` is used by default;
//! - if _years_ is absent, `*` is used by default;
//! - if 6-fields expression is specified, then _seconds_ field is assumed as first and years as absent;
//! - fields beyond the seventh are ignored.
//!
//! The table below describes valid values and patterns of each field:
//!
//! | Field        | Required | Allowed values               | Allowed special characters |
//! |--------------|----------|------------------------------|----------------------------|
//! | Seconds      | No       | 0-59                         | * , - /                    |
//! | Minutes      | Yes      | 0-59                         | * , - /                    |
//! | Hours        | Yes      | 0-23                         | * , - /                    |
//! | Day of Month | Yes      | 1-31                         | * , - / ? L W              |
//! | Month        | Yes      | 1-12 or JAN-DEC, JANUARY-... | * , - /                    |
//! | Day of Week  | Yes      | 0-7 or SUN-SAT, SUNDAY-...   | * , - / ? L #              |
//! | Year         | No       | 1970-2099                    | * , - /                    |
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `?` - same as `*`;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `SUN,FRI`;
//! - `-` - range of values, i.e. `0-15`, `JAN-MAR`; range with the start greater than its end
//!   wraps around, i.e. `22-3` hours are `22,23,0,1,2,3`;
//! - `/` - repeating values, i.e. `*/12`, `10/5`, `30-59/2`;
//! - `L` - last day of the month (for day of month field), or last particular day of the week
//!   (for day of week field), i.e. `L` or `5L`;
//! - `W` - the weekday (not Sunday or Saturday), nearest to the specified day of month in the same month, i.e. `22W`;
//! - `LW` - the last weekday of the month;
//! - `#` - specific day of the week, i.e. `fri#1`, `1#5`.
//!
//! Sunday is `0` or `7`. Names are case-insensitive.
//!
//! If both day of month and day of week fields are restricted (not `*` or `?`),
//! the day matches when either of them matches, like crontab does.
//!
//! Also, short aliases for well-known expressions are allowed:
//!
//! | Alias                      | Expression    |
//! |----------------------------|---------------|
//! | `@yearly` (or `@annually`) | 0 0 0 1 1 * * |
//! | `@monthly`                 | 0 0 0 1 * * * |
//! | `@weekly`                  | 0 0 0 * * 0 * |
//! | `@daily` (or `@midnight`)  | 0 0 0 * * * * |
//! | `@hourly`                  | 0 0 * * * * * |
//!
//! ## How to use
//!
//! The main entity of the crate is an [`Expression`] structure, which has three basic methods:
//! - [next()](Expression::next): returns time of the next occurrence strictly after the provided timestamp;
//! - [next_n()](Expression::next_n): returns up to `n` successive occurrences;
//! - [iter()](Expression::iter): returns an `Iterator` which produces a series of occurrences.
//!
//! Fields are matched against the local date and time of the provided timestamp,
//! and results keep its timezone.
//!
//! ### Example with `next`
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use cron_cascade::Result;
//!
//! fn next() -> Result<()> {
//!     let expression = cron_cascade::parse("0 0 L * *")?;
//!     let from = Utc.with_ymd_and_hms(2016, 2, 15, 0, 0, 0).unwrap();
//!
//!     let next = expression.next(&from);
//!     assert_eq!(next, Some(Utc.with_ymd_and_hms(2016, 2, 29, 0, 0, 0).unwrap()));
//!
//!     Ok(())
//! }
//! # next().unwrap();
//! ```
//!
//! ### Example with `iter`
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use cron_cascade::{Expression, Result};
//!
//! fn iterator() -> Result<()> {
//!     let expression: Expression = "0 0 * * 6#5".parse()?;
//!     let from = Utc.with_ymd_and_hms(2013, 9, 2, 0, 0, 0).unwrap();
//!
//!     // Get the next 3 fifth Saturdays
//!     for t in expression.iter(&from).take(3) {
//!         println!("next: {t}");
//!     }
//!
//!     Ok(())
//! }
//! # iterator().unwrap();
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`Expression`].

mod cursor;
mod days;
/// Crate specific Error implementation.
pub mod error;
/// Cron expression parser and occurrences calculator.
pub mod expression;
mod pattern;
mod series;
mod utils;

// Re-export of public entities.
pub use error::CronError;
pub use expression::{Expression, Occurrences};

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;

/// Parses cron expression, shortcut of [`Expression::parse`].
#[inline]
pub fn parse(text: &str) -> Result<Expression> {
    Expression::parse(text)
}
