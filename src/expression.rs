use crate::{
    describe, next_fire,
    field::{FieldKind, FieldSpec},
    CronError, Result,
};
use chrono::NaiveDateTime;
use std::{fmt::Display, str::FromStr};

/// Represents a parsed Quartz-style cron expression with its methods.
///
/// For the expression format and usage examples, please refer to the
/// [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct CronExpression {
    pub(crate) second: FieldSpec,
    pub(crate) minute: FieldSpec,
    pub(crate) hour: FieldSpec,
    pub(crate) dom: FieldSpec,
    pub(crate) month: FieldSpec,
    pub(crate) dow: FieldSpec,
    pub(crate) year: FieldSpec,
}

impl CronExpression {
    /// Parses and validates the provided `expression` and constructs a [`CronExpression`] instance.
    ///
    /// Alternative way to construct [`CronExpression`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`CronError`] in a case the provided expression is unparsable or has format errors.
    pub fn new(expression: impl AsRef<str>) -> Result<Self> {
        let fields: Vec<&str> = expression.as_ref().split_whitespace().collect();

        if fields.len() != 6 && fields.len() != 7 {
            return Err(CronError::InvalidFieldCount(fields.len()));
        }

        let year = if fields.len() == 7 {
            FieldSpec::parse(FieldKind::Year, fields[6])?
        } else {
            FieldSpec::Wildcard
        };

        Ok(Self {
            second: FieldSpec::parse(FieldKind::Second, fields[0])?,
            minute: FieldSpec::parse(FieldKind::Minute, fields[1])?,
            hour: FieldSpec::parse(FieldKind::Hour, fields[2])?,
            dom: FieldSpec::parse(FieldKind::DayOfMonth, fields[3])?,
            month: FieldSpec::parse(FieldKind::Month, fields[4])?,
            dow: FieldSpec::parse(FieldKind::DayOfWeek, fields[5])?,
            year,
        })
    }

    /// Renders a human-readable description of the recurrence pattern.
    ///
    /// Well-known shapes map to fixed templates ("every minute",
    /// "every monday to friday at 08:30", ...); everything else renders as
    /// `"custom cron expression"`. Pure function of the parsed fields.
    #[inline]
    pub fn describe(&self) -> String {
        describe::describe(self)
    }

    /// Returns the next fire instant strictly after the provided `reference`.
    ///
    /// The calculation uses naive wall-clock time: no time zone, no DST.
    ///
    /// Returns `None` if there is no upcoming fire time, e.g. the year field
    /// constrains the expression entirely to the past.
    #[inline]
    pub fn next_fire_after(&self, reference: &NaiveDateTime) -> Option<NaiveDateTime> {
        next_fire::next_fire_after(self, reference)
    }
}

impl From<CronExpression> for String {
    fn from(value: CronExpression) -> Self {
        value.to_string()
    }
}

impl From<&CronExpression> for String {
    fn from(value: &CronExpression) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CronExpression {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for CronExpression {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CronExpression {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for CronExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for CronExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.second, self.minute, self.hour, self.dom, self.month, self.dow, self.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("not a cron", 3)]
    #[case("* * * * *", 5)]
    #[case("* * * * * * * *", 8)]
    fn new_rejects_wrong_field_count(#[case] expression: &str, #[case] count: usize) {
        assert_eq!(
            CronExpression::new(expression),
            Err(CronError::InvalidFieldCount(count)),
            "expression = '{expression}'"
        );
    }

    #[test]
    fn new_reports_offending_field() {
        assert_eq!(
            CronExpression::new("0 60 * * * ? *"),
            Err(CronError::InvalidField {
                kind: FieldKind::Minute,
                raw: "60".to_owned(),
            })
        );
        assert_eq!(
            CronExpression::new("0 0 0 L * ? *"),
            Err(CronError::UnsupportedToken {
                kind: FieldKind::DayOfMonth,
                raw: "L".to_owned(),
            })
        );
    }

    #[test]
    fn year_defaults_to_wildcard() {
        let six = CronExpression::new("0 30 8 * * ?").unwrap();
        let seven = CronExpression::new("0 30 8 * * ? *").unwrap();

        assert_eq!(six.year, FieldSpec::Wildcard);
        assert_eq!(six, seven);
    }

    #[test]
    fn new_accepts_both_days_constrained() {
        // The Quartz rule that one of day-of-month/day-of-week must be `?`
        // is deliberately not enforced.
        let expression = CronExpression::new("0 0 12 15 * MON *");
        assert!(expression.is_ok(), "error = {}", expression.err().unwrap());
    }

    #[rstest]
    #[case("0 * * * * ? *")]
    #[case("0 0/15 * * * ? *")]
    #[case("0 30 8 ? * MON-FRI *")]
    #[case("0 0 0 1 * ? *")]
    #[case("30 10,20 9-17 ? JAN-MAR SAT,SUN 2025/2")]
    fn parse_is_stable(#[case] expression: &str) {
        let first = CronExpression::new(expression).unwrap();
        let second = CronExpression::new(expression).unwrap();

        assert_eq!(first, second);
    }

    #[rstest]
    #[case("0 * * * * ? *", "0 * * * * ? *")]
    #[case("0 30 8 * * ?", "0 30 8 * * ? *")]
    #[case("0 0/15 * ? * MON-FRI 2025", "0 0/15 * ? * 1-5 2025")]
    #[case("0 0 12 1,15 JAN,JUL ? *", "0 0 12 1,15 1,7 ? *")]
    fn display_normalizes_and_round_trips(#[case] expression: &str, #[case] expected: &str) {
        let parsed = CronExpression::new(expression).unwrap();

        assert_eq!(parsed.to_string(), expected);
        assert_eq!(parsed.to_string().parse::<CronExpression>().unwrap(), parsed);
    }

    #[test]
    fn conversions() {
        let expression = CronExpression::new("0 30 8 ? * MON-FRI *").unwrap();

        assert_eq!(CronExpression::try_from("0 30 8 ? * MON-FRI *").unwrap(), expression);
        assert_eq!(CronExpression::try_from(String::from("0 30 8 ? * MON-FRI *")).unwrap(), expression);
        assert_eq!("0 30 8 ? * MON-FRI *".parse::<CronExpression>().unwrap(), expression);
        assert_eq!(String::from(&expression), "0 30 8 ? * 1-5 *");
    }
}
