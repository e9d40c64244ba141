use crate::field::FieldKind;
use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronError {
    /// Expression does not split into 6 or 7 whitespace-separated fields.
    #[error("invalid cron expression: expected 6 or 7 fields, got {0}")]
    InvalidFieldCount(usize),
    /// Field text does not parse into a value within the field's legal domain.
    #[error("invalid {kind} field: {raw}")]
    InvalidField {
        /// Position of the offending field.
        kind: FieldKind,
        /// Raw text of the offending token.
        raw: String,
    },
    /// Token uses a Quartz extension (`L`, `W`, `#`) this crate does not support.
    #[error("unsupported token in {kind} field: {raw}")]
    UnsupportedToken {
        /// Position of the offending field.
        kind: FieldKind,
        /// Raw text of the offending token.
        raw: String,
    },
}
