use crate::{utils, CronError, Result};
use std::{collections::BTreeSet, fmt::Display};

pub(crate) const MIN_YEAR: FieldValue = 1970;
pub(crate) const MAX_YEAR: FieldValue = 2099;

pub(crate) type FieldValue = u16;

/// Position of a field within a Quartz-style cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    /// Seconds, `0-59`.
    Second,
    /// Minutes, `0-59`.
    Minute,
    /// Hours, `0-23`.
    Hour,
    /// Day of month, `1-31`.
    DayOfMonth,
    /// Month, `1-12` or `JAN-DEC`.
    Month,
    /// Day of week, `0-6` or `SUN-SAT`, `0` is Sunday.
    DayOfWeek,
    /// Year, `1970-2099`.
    Year,
}

impl FieldKind {
    const DAYS_OF_WEEK: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
    const MONTHS: [&str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];

    pub(crate) fn min_max(&self) -> (FieldValue, FieldValue) {
        match self {
            Self::Second => (0, 59),
            Self::Minute => (0, 59),
            Self::Hour => (0, 23),
            Self::DayOfMonth => (1, 31),
            Self::Month => (1, 12),
            Self::DayOfWeek => (0, 6),
            Self::Year => (MIN_YEAR, MAX_YEAR),
        }
    }

    /// Parses a single concrete value of this field's domain,
    /// accepting mnemonic names for months and days of week.
    pub(crate) fn parse_value(&self, input: &str) -> Result<FieldValue> {
        let (min, max) = self.min_max();

        match self {
            Self::Second | Self::Minute | Self::Hour | Self::DayOfMonth | Self::Year => {
                utils::parse_digital_value(input, min, max).ok_or_else(|| self.invalid(input))
            }
            Self::Month => utils::parse_digital_value(input, min, max)
                .or_else(|| utils::parse_string_value(input, &Self::MONTHS).map(|v| v + 1))
                .ok_or_else(|| self.invalid(input)),
            Self::DayOfWeek => utils::parse_digital_value(input, min, max)
                .or_else(|| utils::parse_string_value(input, &Self::DAYS_OF_WEEK))
                .ok_or_else(|| self.invalid(input)),
        }
    }

    fn invalid(&self, raw: &str) -> CronError {
        CronError::InvalidField {
            kind: *self,
            raw: raw.to_owned(),
        }
    }

    /// Rejects Quartz extension tokens (`L`, `W`, `#`) the grammar does not cover.
    fn check_unsupported(&self, token: &str) -> Result<()> {
        let upper = token.to_ascii_uppercase();
        let unsupported = match self {
            Self::DayOfMonth => upper == "L" || upper.ends_with('W'),
            Self::DayOfWeek => upper.contains('#') || upper.ends_with('L'),
            _ => false,
        };

        if unsupported {
            Err(CronError::UnsupportedToken {
                kind: *self,
                raw: token.to_owned(),
            })
        } else {
            Ok(())
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Second => "seconds",
            Self::Minute => "minutes",
            Self::Hour => "hours",
            Self::DayOfMonth => "day of month",
            Self::Month => "month",
            Self::DayOfWeek => "day of week",
            Self::Year => "year",
        };
        write!(f, "{name}")
    }
}

/// Parsed shape of a single cron field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum FieldSpec {
    /// Every legal value of the domain (`*`).
    Wildcard,
    /// No specific value (`?`), day of month and day of week only.
    Unspecified,
    /// One concrete value.
    Single(FieldValue),
    /// Flattened comma list: concrete values, deduplicated, ascending.
    List(Vec<FieldValue>),
    /// Inclusive range `lo-hi`.
    Range(FieldValue, FieldValue),
    /// Repeating values `base/interval`.
    Step(FieldValue, FieldValue),
}

impl FieldSpec {
    /// Parses one field's raw text against the `kind`'s domain.
    pub(crate) fn parse(kind: FieldKind, input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(kind.invalid(input));
        }

        if input == "*" {
            return Ok(Self::Wildcard);
        }

        if input == "?" {
            return if matches!(kind, FieldKind::DayOfMonth | FieldKind::DayOfWeek) {
                Ok(Self::Unspecified)
            } else {
                Err(kind.invalid(input))
            };
        }

        if input.contains(',') {
            let mut values = BTreeSet::new();
            for token in input.split(',') {
                if token == "*" || token == "?" {
                    return Err(kind.invalid(input));
                }
                kind.check_unsupported(token)?;
                values.extend(Self::parse_token(kind, token)?.expand(kind));
            }

            Ok(Self::List(values.into_iter().collect()))
        } else {
            kind.check_unsupported(input)?;
            Self::parse_token(kind, input)
        }
    }

    /// Parses a comma-free token: range, step or single value.
    fn parse_token(kind: FieldKind, token: &str) -> Result<Self> {
        if let Some((base, interval)) = token.split_once('/') {
            let base = if base == "*" {
                kind.min_max().0
            } else {
                kind.parse_value(base)?
            };
            let interval = match interval.parse::<FieldValue>() {
                Ok(interval) if interval >= 1 => interval,
                _ => return Err(kind.invalid(token)),
            };

            Ok(Self::Step(base, interval))
        } else if let Some((lo, hi)) = token.split_once('-') {
            let lo = kind.parse_value(lo)?;
            let hi = kind.parse_value(hi)?;
            if hi < lo {
                return Err(kind.invalid(token));
            }

            Ok(Self::Range(lo, hi))
        } else {
            Ok(Self::Single(kind.parse_value(token)?))
        }
    }

    /// Returns `true` when the field imposes no constraint.
    pub(crate) fn is_free(&self) -> bool {
        matches!(self, Self::Wildcard | Self::Unspecified)
    }

    /// Smallest concrete value of a constrained field.
    pub(crate) fn first(&self) -> Option<FieldValue> {
        match self {
            Self::Wildcard | Self::Unspecified => None,
            Self::Single(value) => Some(*value),
            Self::List(values) => values.first().copied(),
            Self::Range(lo, _) => Some(*lo),
            Self::Step(base, _) => Some(*base),
        }
    }

    /// All concrete values of the field within the `kind`'s domain, ascending.
    pub(crate) fn expand(&self, kind: FieldKind) -> Vec<FieldValue> {
        let (min, max) = kind.min_max();
        match self {
            Self::Wildcard => (min..=max).collect(),
            Self::Unspecified => Vec::new(),
            Self::Single(value) => vec![*value],
            Self::List(values) => values.clone(),
            Self::Range(lo, hi) => (*lo..=*hi).collect(),
            Self::Step(base, interval) => (*base..=max).step_by(usize::from(*interval)).collect(),
        }
    }

    /// Returns `true` when the field allows `value`; a free field allows everything.
    pub(crate) fn contains(&self, value: FieldValue) -> bool {
        match self {
            Self::Wildcard | Self::Unspecified => true,
            Self::Single(single) => *single == value,
            Self::List(values) => values.binary_search(&value).is_ok(),
            Self::Range(lo, hi) => (*lo..=*hi).contains(&value),
            Self::Step(base, interval) => value >= *base && (value - base) % interval == 0,
        }
    }
}

impl Display for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wildcard => write!(f, "*"),
            Self::Unspecified => write!(f, "?"),
            Self::Single(value) => write!(f, "{value}"),
            Self::List(values) => {
                let values = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
                write!(f, "{values}")
            }
            Self::Range(lo, hi) => write!(f, "{lo}-{hi}"),
            Self::Step(base, interval) => write!(f, "{base}/{interval}"),
        }
    }
}
