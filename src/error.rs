use thiserror::Error;

/// Crate specific Errors implementation.
///
/// Every error is raised while parsing; computing occurrences never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronError {
    /// Expression has fewer than five fields.
    #[error("missing field(s) in cron expression: '{0}'")]
    MissingFields(String),
    /// Field entry doesn't match any known form.
    #[error("syntax error in {field} field: '{text}'")]
    SyntaxError {
        /// Name of the offending field.
        field: &'static str,
        /// Offending part of the field.
        text: String,
    },
    /// Step of a repeating entry is zero or larger than the field's maximum.
    #[error("invalid interval in {field} field: '{text}'")]
    InvalidInterval {
        /// Name of the offending field.
        field: &'static str,
        /// Offending part of the field.
        text: String,
    },
}
