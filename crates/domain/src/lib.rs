// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod criteria;
mod error;
mod holiday;
mod period;
mod types;
mod validation;
mod weekday;

#[cfg(test)]
mod tests;

pub use criteria::{ApplicabilityCriteria, CandidateRecord, WeekScheme, resolve_active_record};
pub use error::DomainError;
pub use holiday::Holiday;
pub use period::{Period, iso_week_number, week_start_of};
pub use types::{RawHoliday, RawPeriod, RecordId};
pub use validation::{DATE_FORMAT, parse_date, parse_optional_date, parse_time, parse_weekday};
pub use weekday::{
    WEEKDAYS, WeekdayName, WeekdaySet, weekday_from_index, weekday_index, weekday_name,
};
