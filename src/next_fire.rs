//! Next fire time calculation.
//!
//! The candidate instant starts at the reference and is advanced
//! field-by-field with carry propagation: seconds, minutes, hours, day of
//! month, month, day of week, year, then a single monotonicity guard. There
//! is no full re-derivation loop; each field is advanced at most a small
//! constant number of steps.

use crate::{
    expression::CronExpression,
    field::{FieldKind, FieldSpec, FieldValue, MAX_YEAR},
    utils::days_in_month,
};
use chrono::{Datelike, Months, NaiveDateTime, TimeDelta, Timelike};

/// Relative position of the current weekday within a day-of-week range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeekPosition {
    BeforeStart,
    Contained,
    AfterEnd,
}

fn week_position(current: FieldValue, start: FieldValue, end: FieldValue) -> WeekPosition {
    if current < start {
        WeekPosition::BeforeStart
    } else if current > end {
        WeekPosition::AfterEnd
    } else {
        WeekPosition::Contained
    }
}

/// Smallest `base + k * interval` not less than `from`.
fn next_in_series(base: FieldValue, interval: FieldValue, from: FieldValue) -> FieldValue {
    let mut value = base;
    while value < from {
        value += interval;
    }
    value
}

/// First day of the month following the candidate's, time of day preserved.
fn first_day_of_next_month(candidate: NaiveDateTime) -> Option<NaiveDateTime> {
    candidate.with_day(1)?.checked_add_months(Months::new(1))
}

/// Moves the candidate to `month` of `year`, preserving its day.
///
/// A day the target month does not have cannot be preserved: a free day field
/// falls back to the first of the month, a constrained one rolls the year
/// forward until the month is long enough, e.g. February the 29th. `None` when
/// no year up to the domain maximum has the day.
fn with_month_and_year(
    candidate: NaiveDateTime,
    month: FieldValue,
    year: i32,
    day_is_free: bool,
) -> Option<NaiveDateTime> {
    let day = candidate.day();
    let result = candidate.with_day(1)?.with_year(year)?.with_month(u32::from(month))?;

    if day as FieldValue <= days_in_month(year as FieldValue, month) {
        return result.with_day(day);
    }
    if day_is_free {
        return Some(result);
    }

    let mut year = year;
    loop {
        year += 1;
        if year > i32::from(MAX_YEAR) {
            return None;
        }
        if day as FieldValue <= days_in_month(year as FieldValue, month) {
            return result.with_year(year)?.with_day(day);
        }
    }
}

/// Adds whole months, re-applying a constrained day of month instead of
/// accepting the end-of-month clamp of [`NaiveDateTime::checked_add_months`].
/// Months without the day are skipped by adding the same increment again.
fn add_months_keeping_day(candidate: NaiveDateTime, months: u32, dom: &FieldSpec) -> Option<NaiveDateTime> {
    let day = match dom.first() {
        Some(day) => u32::from(day),
        None => return candidate.checked_add_months(Months::new(months)),
    };

    let mut result = candidate.with_day(1)?.checked_add_months(Months::new(months))?;
    while result.with_day(day).is_none() {
        if result.year() >= i32::from(MAX_YEAR) {
            return None;
        }
        result = result.checked_add_months(Months::new(months))?;
    }
    result.with_day(day)
}

pub(crate) fn next_fire_after(expr: &CronExpression, reference: &NaiveDateTime) -> Option<NaiveDateTime> {
    let mut candidate = *reference;

    // Seconds: a constrained field pins the value, anything else resets to zero.
    candidate = match expr.second.first() {
        Some(second) => candidate.with_second(u32::from(second))?,
        None => candidate.with_second(0)?,
    };

    // Minutes.
    let mut minute_wrapped = false;
    match &expr.minute {
        FieldSpec::Wildcard | FieldSpec::Unspecified => {
            minute_wrapped = candidate.minute() == 59;
            candidate += TimeDelta::minutes(1);
        }
        FieldSpec::Step(base, interval) => {
            let target = next_in_series(*base, *interval, candidate.minute() as FieldValue + 1);
            if target > 59 {
                candidate = candidate.with_minute(u32::from(target % 60))? + TimeDelta::hours(1);
                minute_wrapped = true;
            } else {
                candidate = candidate.with_minute(u32::from(target))?;
            }
        }
        other => {
            candidate = candidate.with_minute(u32::from(other.first()?))?;
        }
    }

    // Hours: step values are advanced only when the minute computation
    // wrapped or the current hour is off the series.
    match &expr.hour {
        FieldSpec::Wildcard | FieldSpec::Unspecified => {}
        FieldSpec::Step(base, interval) => {
            let current = candidate.hour() as FieldValue;
            let aligned = current >= *base && (current - base) % interval == 0;
            if minute_wrapped || !aligned {
                let from = if minute_wrapped { current } else { current + 1 };
                let target = next_in_series(*base, *interval, from);
                if target > 23 {
                    candidate = candidate.with_hour(u32::from(target % 24))? + TimeDelta::days(1);
                } else {
                    candidate = candidate.with_hour(u32::from(target))?;
                }
            }
        }
        other => {
            candidate = candidate.with_hour(u32::from(other.first()?))?;
        }
    }

    // Day of month.
    match &expr.dom {
        FieldSpec::Wildcard | FieldSpec::Unspecified => {}
        FieldSpec::Step(base, interval) => {
            let target = next_in_series(*base, *interval, candidate.day() as FieldValue + 1);
            if target > days_in_month(candidate.year() as FieldValue, candidate.month() as FieldValue) {
                candidate = first_day_of_next_month(candidate)?;
            } else {
                candidate = candidate.with_day(u32::from(target))?;
            }
        }
        other => {
            let day = other.first()?;
            candidate = match candidate.with_day(u32::from(day)) {
                Some(next) => next,
                // The day is absent from the current month, e.g. the 31st in February.
                None => first_day_of_next_month(candidate)?.with_day(u32::from(day))?,
            };
        }
    }

    // Month: the candidate's day may not exist in the target month, so the
    // move goes through the day-preserving setter.
    match &expr.month {
        FieldSpec::Wildcard | FieldSpec::Unspecified => {}
        FieldSpec::Step(base, interval) => {
            let target = next_in_series(*base, *interval, candidate.month() as FieldValue + 1);
            let years_ahead = (target - 1) / 12;
            let month = (target - 1) % 12 + 1;
            let year = candidate.year() + i32::from(years_ahead);
            candidate = with_month_and_year(candidate, month, year, expr.dom.is_free())?;
        }
        other => {
            candidate = with_month_and_year(candidate, other.first()?, candidate.year(), expr.dom.is_free())?;
        }
    }

    // Day of week: a constrained field always moves the candidate to a later
    // day, even when the current day would still match.
    match &expr.dow {
        FieldSpec::Wildcard | FieldSpec::Unspecified => {}
        FieldSpec::Range(start, end) => {
            let current = candidate.weekday().num_days_from_sunday() as FieldValue;
            let delta = match week_position(current, *start, *end) {
                WeekPosition::BeforeStart => start - current,
                WeekPosition::Contained if current == *end => 7 - end + start,
                WeekPosition::Contained => 1,
                WeekPosition::AfterEnd => 7 - current + start,
            };
            candidate += TimeDelta::days(i64::from(delta));
        }
        other => {
            let days = other.expand(FieldKind::DayOfWeek);
            let current = candidate.weekday().num_days_from_sunday() as FieldValue;
            let delta = days
                .iter()
                .find(|day| **day > current)
                .map(|day| day - current)
                .unwrap_or(7 - current + *days.first()?);
            candidate += TimeDelta::days(i64::from(delta));
        }
    }

    // Year: a single value is pinned as is, even into the past; the final
    // checks below turn an exhausted year constraint into "no fire found".
    match &expr.year {
        FieldSpec::Wildcard | FieldSpec::Unspecified => {}
        FieldSpec::Single(year) => {
            candidate = candidate.with_year(i32::from(*year))?;
        }
        other => {
            let current = candidate.year() as FieldValue;
            let year = other.expand(FieldKind::Year).into_iter().find(|year| *year >= current)?;
            if year != current {
                candidate = candidate.with_year(i32::from(year))?;
            }
        }
    }

    // Monotonicity guard: advance the smallest calendar unit coarser than the
    // most significant constrained field, exactly once.
    if candidate <= *reference {
        candidate = if !expr.month.is_free() {
            add_months_keeping_day(candidate, 12, &expr.dom)?
        } else if !expr.dom.is_free() {
            add_months_keeping_day(candidate, 1, &expr.dom)?
        } else if !expr.hour.is_free() {
            candidate + TimeDelta::days(1)
        } else if !expr.minute.is_free() {
            candidate + TimeDelta::hours(1)
        } else {
            candidate + TimeDelta::minutes(1)
        };
    }

    if candidate <= *reference {
        return None;
    }
    if !expr.year.contains(candidate.year() as FieldValue) {
        return None;
    }

    Some(candidate)
}
