//! Human-readable descriptions of recurrence patterns.
//!
//! A fixed, ordered list of `(predicate, template)` rules is evaluated in
//! sequence; the first matching rule wins. Many legal expressions collapse to
//! the generic fallback string; that is accepted behavior, not a defect.

use crate::{
    expression::CronExpression,
    field::{FieldSpec, FieldValue},
};

const DAY_NAMES: [&str; 7] = ["sunday", "monday", "tuesday", "wednesday", "thursday", "friday", "saturday"];

type Rule = fn(&CronExpression) -> Option<String>;

// Order matters: the first-of-month rule must precede the generic
// day-of-month rule, which would otherwise shadow it.
const RULES: [Rule; 8] = [
    every_minute,
    every_n_minutes,
    every_n_hours,
    every_day_at,
    every_weekday_at,
    first_day_of_month,
    every_month_on_day,
    every_year_on_date,
];

pub(crate) fn describe(expr: &CronExpression) -> String {
    RULES
        .iter()
        .find_map(|rule| rule(expr))
        .unwrap_or_else(|| "custom cron expression".to_string())
}

/// Extracts the fixed `(hour, minute)` of expressions firing once a day,
/// i.e. seconds `0`, single minute, single hour.
fn at_time(expr: &CronExpression) -> Option<(FieldValue, FieldValue)> {
    match (&expr.second, &expr.minute, &expr.hour) {
        (FieldSpec::Single(0), FieldSpec::Single(minute), FieldSpec::Single(hour)) => Some((*hour, *minute)),
        _ => None,
    }
}

fn every_minute(expr: &CronExpression) -> Option<String> {
    (expr.second == FieldSpec::Single(0)
        && expr.minute == FieldSpec::Wildcard
        && expr.hour == FieldSpec::Wildcard
        && expr.dom.is_free()
        && expr.month == FieldSpec::Wildcard
        && expr.dow.is_free()
        && expr.year == FieldSpec::Wildcard)
        .then(|| "every minute".to_string())
}

fn every_n_minutes(expr: &CronExpression) -> Option<String> {
    if expr.second != FieldSpec::Single(0)
        || expr.hour != FieldSpec::Wildcard
        || expr.month != FieldSpec::Wildcard
        || expr.year != FieldSpec::Wildcard
    {
        return None;
    }

    match expr.minute {
        FieldSpec::Step(_, interval) => Some(format!("every {interval} minute(s)")),
        _ => None,
    }
}

fn every_n_hours(expr: &CronExpression) -> Option<String> {
    if expr.second != FieldSpec::Single(0)
        || expr.minute != FieldSpec::Single(0)
        || expr.month != FieldSpec::Wildcard
        || expr.year != FieldSpec::Wildcard
    {
        return None;
    }

    match expr.hour {
        FieldSpec::Step(_, interval) => Some(format!("every {interval} hour(s)")),
        _ => None,
    }
}

fn every_day_at(expr: &CronExpression) -> Option<String> {
    let (hour, minute) = at_time(expr)?;

    (expr.dom.is_free() && expr.month == FieldSpec::Wildcard && expr.dow.is_free() && expr.year == FieldSpec::Wildcard)
        .then(|| format!("every day at {hour:02}:{minute:02}"))
}

fn every_weekday_at(expr: &CronExpression) -> Option<String> {
    let (hour, minute) = at_time(expr)?;

    if !expr.dom.is_free() || expr.month != FieldSpec::Wildcard || expr.year != FieldSpec::Wildcard {
        return None;
    }

    let days = match &expr.dow {
        FieldSpec::Single(day) => DAY_NAMES[usize::from(*day)].to_string(),
        FieldSpec::Range(start, end) => {
            format!("{} to {}", DAY_NAMES[usize::from(*start)], DAY_NAMES[usize::from(*end)])
        }
        FieldSpec::List(days) => days
            .iter()
            .map(|day| DAY_NAMES[usize::from(*day)])
            .collect::<Vec<_>>()
            .join(","),
        _ => return None,
    };

    Some(format!("every {days} at {hour:02}:{minute:02}"))
}

fn first_day_of_month(expr: &CronExpression) -> Option<String> {
    (expr.second == FieldSpec::Single(0)
        && expr.minute == FieldSpec::Single(0)
        && expr.hour == FieldSpec::Single(0)
        && expr.dom == FieldSpec::Single(1)
        && expr.month == FieldSpec::Wildcard
        && expr.dow == FieldSpec::Unspecified
        && expr.year == FieldSpec::Wildcard)
        .then(|| "first day of every month at midnight".to_string())
}

fn every_month_on_day(expr: &CronExpression) -> Option<String> {
    let (hour, minute) = at_time(expr)?;

    match expr.dom {
        FieldSpec::Single(day)
            if expr.month == FieldSpec::Wildcard && expr.dow.is_free() && expr.year == FieldSpec::Wildcard =>
        {
            Some(format!("every month on day {day} at {hour:02}:{minute:02}"))
        }
        _ => None,
    }
}

fn every_year_on_date(expr: &CronExpression) -> Option<String> {
    let (hour, minute) = at_time(expr)?;

    match (&expr.dom, &expr.month) {
        (FieldSpec::Single(day), FieldSpec::Single(month))
            if expr.dow.is_free() && expr.year == FieldSpec::Wildcard =>
        {
            Some(format!("every year on {day}/{month} at {hour:02}:{minute:02}"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parsed(expression: &str) -> CronExpression {
        CronExpression::new(expression).unwrap()
    }

    #[rstest]
    #[case("0 * * * * ? *", "every minute")]
    #[case("0 * * * * * *", "every minute")]
    #[case("0 * * ? * * *", "every minute")]
    #[case("0 0/15 * * * ? *", "every 15 minute(s)")]
    #[case("0 */5 * * * ? *", "every 5 minute(s)")]
    #[case("0 0/15 * 10 * ? *", "every 15 minute(s)")]
    #[case("0 0 0/6 * * ? *", "every 6 hour(s)")]
    #[case("0 0 */2 ? * * *", "every 2 hour(s)")]
    #[case("0 30 8 * * ? *", "every day at 08:30")]
    #[case("0 5 17 ? * * *", "every day at 17:05")]
    #[case("0 30 8 ? * MON-FRI *", "every monday to friday at 08:30")]
    #[case("0 0 9 ? * MON *", "every monday at 09:00")]
    #[case("0 0 9 ? * MON,WED,FRI *", "every monday,wednesday,friday at 09:00")]
    #[case("0 0 0 1 * ? *", "first day of every month at midnight")]
    #[case("0 30 8 15 * ? *", "every month on day 15 at 08:30")]
    #[case("0 0 0 2 * ? *", "every month on day 2 at 00:00")]
    #[case("0 0 12 25 12 ? *", "every year on 25/12 at 12:00")]
    #[case("0 0 0 1 1 ? *", "every year on 1/1 at 00:00")]
    fn describe_known_shapes(#[case] expression: &str, #[case] expected: &str) {
        assert_eq!(parsed(expression).describe(), expected, "expression = {expression}");
    }

    #[rstest]
    // seconds other than a fixed 0 never match a template
    #[case("30 * * * * ? *")]
    #[case("*/10 * * * * ? *")]
    // minute list or range has no template
    #[case("0 10,20 * * * ? *")]
    #[case("0 0-30 8 * * ? *")]
    // constrained year has no template
    #[case("0 30 8 * * ? 2030")]
    // day-of-week step has no template
    #[case("0 30 8 ? * 1/2 *")]
    // day-of-month range with fixed time has no template
    #[case("0 30 8 10-15 * ? *")]
    fn describe_falls_back(#[case] expression: &str) {
        assert_eq!(parsed(expression).describe(), "custom cron expression");
    }

    #[test]
    fn first_day_of_month_takes_precedence_over_day_template() {
        // `0 0 0 1 * ? *` matches both the first-of-month rule and the
        // generic "every month on day N" rule; the more specific one wins.
        assert_eq!(parsed("0 0 0 1 * ? *").describe(), "first day of every month at midnight");
        // With a wildcard day-of-week the specific rule does not apply.
        assert_eq!(parsed("0 0 0 1 * * *").describe(), "every month on day 1 at 00:00");
    }

    #[test]
    fn describe_is_deterministic() {
        let expression = parsed("0 30 8 ? * MON-FRI *");
        assert_eq!(expression.describe(), expression.describe());
    }
}
