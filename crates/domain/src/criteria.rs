// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Applicability criteria and active record resolution.
//!
//! A schedule record may have child records that override it. Each child
//! declares when it applies: a date window, a week parity, or both.
//!
//! ## Rules
//!
//! - A child declaring neither a date window nor a parity never applies
//! - Dates are compared as calendar dates; both window ends are inclusive
//! - Parity is taken from the week number supplied by the caller, normally
//!   the ISO-8601 week number of the date
//! - Children are evaluated in store order and the last applicable child wins
//!
//! This module is pure. Fetching children from a store is the caller's job.

use crate::error::DomainError;
use crate::types::RecordId;
use crate::validation::parse_optional_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Week parity filter of a child record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekScheme {
    /// Every week.
    #[default]
    All,
    /// Weeks with an even ISO week number.
    Even,
    /// Weeks with an odd ISO week number.
    Odd,
}

impl FromStr for WeekScheme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(Self::All),
            "even" => Ok(Self::Even),
            "odd" => Ok(Self::Odd),
            other => Err(DomainError::InvalidWeekScheme(other.to_string())),
        }
    }
}

impl WeekScheme {
    /// Returns the stored string value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }

    /// Returns whether a week with the given ISO number matches this scheme.
    #[must_use]
    pub const fn matches_week(&self, iso_week: u32) -> bool {
        match self {
            Self::All => true,
            Self::Even => iso_week % 2 == 0,
            Self::Odd => iso_week % 2 == 1,
        }
    }
}

impl std::fmt::Display for WeekScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The conditions under which a child record overrides its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicabilityCriteria {
    /// First day the child applies, if bounded.
    pub date_start: Option<NaiveDate>,
    /// Last day the child applies, if bounded.
    pub date_end: Option<NaiveDate>,
    /// Week parity filter.
    pub week_scheme: WeekScheme,
}

impl ApplicabilityCriteria {
    /// Creates criteria from typed values.
    #[must_use]
    pub const fn new(
        date_start: Option<NaiveDate>,
        date_end: Option<NaiveDate>,
        week_scheme: WeekScheme,
    ) -> Self {
        Self {
            date_start,
            date_end,
            week_scheme,
        }
    }

    /// Parses criteria from raw record details.
    ///
    /// Absent or blank values mean "not declared".
    ///
    /// # Errors
    ///
    /// Returns an error if a date or the week scheme cannot be parsed.
    pub fn from_details(
        date_start: Option<&str>,
        date_end: Option<&str>,
        week_scheme: Option<&str>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            date_start: parse_optional_date(date_start)?,
            date_end: parse_optional_date(date_end)?,
            week_scheme: week_scheme.map_or(Ok(WeekScheme::All), WeekScheme::from_str)?,
        })
    }

    /// Returns whether any criterion is declared at all.
    #[must_use]
    pub const fn is_scoped(&self) -> bool {
        self.date_start.is_some()
            || self.date_end.is_some()
            || !matches!(self.week_scheme, WeekScheme::All)
    }

    /// Returns whether every declared criterion holds on `today`, which
    /// falls in week number `week`.
    ///
    /// Unscoped criteria never apply.
    #[must_use]
    pub fn applies_on(&self, today: NaiveDate, week: u32) -> bool {
        if !self.is_scoped() {
            return false;
        }

        if self.date_start.is_some_and(|start| today < start) {
            return false;
        }

        if self.date_end.is_some_and(|end| today > end) {
            return false;
        }

        self.week_scheme.matches_week(week)
    }
}

/// A child record considered for overriding its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateRecord {
    /// The child's identifier.
    pub id: RecordId,
    /// When the child applies.
    pub criteria: ApplicabilityCriteria,
}

impl CandidateRecord {
    /// Creates a new `CandidateRecord`.
    #[must_use]
    pub const fn new(id: RecordId, criteria: ApplicabilityCriteria) -> Self {
        Self { id, criteria }
    }
}

/// Selects the record that is authoritative on `today`.
///
/// Starts from `parent` and lets every applicable child, in the given
/// order, replace the current choice. The last applicable child wins, so
/// callers must order children from lowest to highest priority.
///
/// # Arguments
///
/// * `parent` - The record the schedule was requested for
/// * `children` - Candidate overrides in store order
/// * `today` - The calendar date in the configured zone
/// * `week` - The week number of `today`, used for parity
#[must_use]
pub fn resolve_active_record(
    parent: RecordId,
    children: &[CandidateRecord],
    today: NaiveDate,
    week: u32,
) -> RecordId {
    children
        .iter()
        .filter(|child| child.criteria.applies_on(today, week))
        .fold(parent, |_, child| child.id)
}
