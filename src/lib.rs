//! Quartz-style cron expression interpreter.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a small crate, intended to:
//! - parse Quartz-style cron expressions (6 or 7 fields, seconds and optional year);
//! - render a human-readable description of the recurrence pattern;
//! - calculate the next fire instant strictly after a reference instant.
//!
//! All calculations are done in naive local wall-clock time ([`chrono::NaiveDateTime`]):
//! there is no time-zone database and no daylight-saving adjustment.
//!
//! _This is not a cron jobs scheduler or runner._ It is the computational core
//! behind schedule forms: "what does this expression mean" and "when does it fire next".
//!
//! ## Cron expression format
//!
//! An expression consists of 6 or 7 whitespace-separated fields. If the _year_
//! field is omitted, `*` is assumed.
//!
//! The table below describes valid values and patterns of each field:
//!
//! | Field        | Required | Allowed values  | Allowed special characters |
//! |--------------|----------|-----------------|----------------------------|
//! | Seconds      | Yes      | 0-59            | * , - /                    |
//! | Minutes      | Yes      | 0-59            | * , - /                    |
//! | Hours        | Yes      | 0-23            | * , - /                    |
//! | Day of Month | Yes      | 1-31            | * , - / ?                  |
//! | Month        | Yes      | 1-12 or JAN-DEC | * , - /                    |
//! | Day of Week  | Yes      | 0-6 or SUN-SAT  | * , - ?                    |
//! | Year         | No       | 1970-2099       | * , - /                    |
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `SUN,FRI`;
//! - `-` - range of values, i.e. `0-15`, `JAN-MAR`;
//! - `/` - repeating values, i.e. `*/12`, `10/5`;
//! - `?` - for days of month or week means that the field imposes no constraint,
//!   deferring to the other of the two.
//!
//! Day of week `0` is Sunday. The Quartz `L`, `W` and `#` extensions are not
//! supported and are rejected with [`CronError::UnsupportedToken`].
//!
//! ## How to use
//!
//! The single public entity of the crate is a [`CronExpression`] structure, which
//! has three basic methods:
//! - [new()](CronExpression::new): constructor to parse and validate an expression;
//! - [describe()](CronExpression::describe): renders a human-readable description;
//! - [next_fire_after()](CronExpression::next_fire_after): calculates the next fire
//!   instant strictly after a reference instant.
//!
//! ### Example with `describe`
//! ```rust
//! use cron_teller::{CronExpression, Result};
//!
//! fn describe() -> Result<()> {
//!     let expression = CronExpression::new("0 0/15 * * * ? *")?;
//!
//!     assert_eq!(expression.describe(), "every 15 minute(s)");
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Example with `next_fire_after`
//! ```rust
//! use chrono::NaiveDate;
//! use cron_teller::{CronExpression, Result};
//!
//! fn next_fire() -> Result<()> {
//!     let expression = CronExpression::new("0 30 8 ? * MON-FRI *")?;
//!     let reference = NaiveDate::from_ymd_opt(2025, 6, 7)
//!         .unwrap()
//!         .and_hms_opt(9, 0, 0)
//!         .unwrap();
//!
//!     // Get the next fire instant strictly after the reference
//!     let next = expression.next_fire_after(&reference);
//!     assert!(next.is_some());
//!
//!     println!("next: {}", next.unwrap());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html)
//!   and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html)
//!   trait implementation for [`CronExpression`].

mod describe;
/// Crate specific Error implementation.
pub mod error;
/// Cron expression parser, descriptions and next fire time calculation.
pub mod expression;
mod field;
mod next_fire;
mod utils;

// Re-export of public entities.
pub use error::CronError;
pub use expression::CronExpression;
pub use field::FieldKind;

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
