use chrono::NaiveDateTime;
use cron_teller::{CronError, CronExpression, FieldKind, Result};

fn instant(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

#[test]
fn describe_weekday_schedule() -> Result<()> {
    let expression = CronExpression::new("0 30 8 ? * MON-FRI *")?;

    assert_eq!(expression.describe(), "every monday to friday at 08:30");

    Ok(())
}

#[test]
fn describe_falls_back_for_unknown_shape() -> Result<()> {
    let expression = CronExpression::new("30 10,20 9-17 ? * SAT,SUN *")?;

    assert_eq!(expression.describe(), "custom cron expression");

    Ok(())
}

#[test]
fn next_fire_skips_weekend() -> Result<()> {
    let expression = CronExpression::new("0 30 8 ? * MON-FRI *")?;
    // Saturday morning, next business day is Monday
    let reference = instant("2025-06-07T09:00:00");

    assert_eq!(
        expression.next_fire_after(&reference),
        Some(instant("2025-06-09T08:30:00"))
    );

    Ok(())
}

#[test]
fn next_fire_carries_to_next_month() -> Result<()> {
    let expression = CronExpression::new("0 0 0 1 * ? *")?;
    let reference = instant("2025-03-15T12:00:00");

    assert_eq!(
        expression.next_fire_after(&reference),
        Some(instant("2025-04-01T00:00:00"))
    );
    assert_eq!(expression.describe(), "first day of every month at midnight");

    Ok(())
}

#[test]
fn next_fire_exhausted_year_yields_none() -> Result<()> {
    let expression = CronExpression::new("0 0 0 1 1 ? 1999")?;
    let reference = instant("2025-03-15T12:00:00");

    assert_eq!(expression.next_fire_after(&reference), None);

    Ok(())
}

#[test]
fn invalid_expression_names_the_field() {
    assert_eq!(
        CronExpression::new("0 0 25 * * ? *"),
        Err(CronError::InvalidField {
            kind: FieldKind::Hour,
            raw: "25".to_owned(),
        })
    );
    assert_eq!(
        CronExpression::new("0 0 12 ? * 5L *"),
        Err(CronError::UnsupportedToken {
            kind: FieldKind::DayOfWeek,
            raw: "5L".to_owned(),
        })
    );
}

#[test]
fn repeated_queries_advance_strictly() -> Result<()> {
    let expression = CronExpression::new("0 0/15 * * * ? *")?;
    let mut reference = instant("2025-01-01T10:07:00");

    for _ in 0..8 {
        let next = expression.next_fire_after(&reference).unwrap();
        assert!(next > reference, "next = {next}, reference = {reference}");
        reference = next;
    }
    assert_eq!(reference, instant("2025-01-01T12:00:00"));

    Ok(())
}

#[test]
fn display_round_trip_preserves_behavior() -> Result<()> {
    let expression = CronExpression::new("0 30 8 ? * MON-FRI 2025-2030")?;
    let round_tripped: CronExpression = expression.to_string().parse()?;

    let reference = instant("2025-06-07T09:00:00");
    assert_eq!(round_tripped, expression);
    assert_eq!(
        round_tripped.next_fire_after(&reference),
        expression.next_fire_after(&reference)
    );

    Ok(())
}
