// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command responses and their text rendering.
//!
//! Every command builds one response struct. `--json` prints it with
//! `serde_json`; otherwise `render_text` produces a short human summary.

use chrono::{NaiveDate, NaiveDateTime};
use ophours::{NextOpening, Schedule};
use ophours_domain::{Holiday, Period, RecordId, weekday_name};
use serde::Serialize;

const TIME_FORMAT: &str = "%H:%M";
const INSTANT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Identity of the schedule a response was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleInfo {
    /// The record that was asked for.
    pub record: RecordId,
    /// The record whose periods and holidays were used.
    pub active_record: RecordId,
    pub description: String,
}

impl ScheduleInfo {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            record: schedule.parent_id(),
            active_record: schedule.id(),
            description: schedule.description().to_string(),
        }
    }

    fn header(&self) -> String {
        let mut header: String = format!("Record {}", self.record);
        if self.active_record != self.record {
            header.push_str(&format!(" (override {})", self.active_record));
        }
        if !self.description.is_empty() {
            header.push_str(&format!(": {}", self.description));
        }
        header
    }
}

/// Response of `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub schedule: ScheduleInfo,
    pub at: NaiveDateTime,
    pub open: bool,
    /// The holiday closing the resource today, if any.
    pub holiday: Option<String>,
}

impl StatusResponse {
    pub fn new(schedule: &Schedule, at: NaiveDateTime) -> Self {
        Self {
            schedule: ScheduleInfo::from_schedule(schedule),
            at,
            open: schedule.is_open(at),
            holiday: schedule
                .current_holiday(at.date())
                .map(|holiday| holiday.name().to_string()),
        }
    }
}

/// Response of `next`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextResponse {
    #[serde(flatten)]
    pub schedule: ScheduleInfo,
    pub weekday: &'static str,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub skip_holidays: bool,
}

impl NextResponse {
    pub fn new(schedule: &Schedule, opening: &NextOpening<'_>, skip_holidays: bool) -> Self {
        Self {
            schedule: ScheduleInfo::from_schedule(schedule),
            weekday: weekday_name(opening.period.weekday()).name,
            start: opening.start,
            end: opening.end(),
            skip_holidays,
        }
    }
}

/// One period line of a weekly agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodEntry {
    pub start: String,
    pub end: String,
    /// Set for the filler entry of a day without periods.
    pub placeholder: bool,
}

impl From<&Period> for PeriodEntry {
    fn from(period: &Period) -> Self {
        Self {
            start: period.time_start().format(TIME_FORMAT).to_string(),
            end: period.time_end().format(TIME_FORMAT).to_string(),
            placeholder: period.is_dummy(),
        }
    }
}

/// One weekday of a weekly agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEntry {
    pub weekday: &'static str,
    pub periods: Vec<PeriodEntry>,
}

/// Response of `week`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekResponse {
    #[serde(flatten)]
    pub schedule: ScheduleInfo,
    pub days: Vec<DayEntry>,
}

impl WeekResponse {
    pub fn new(schedule: &Schedule) -> Self {
        let days: Vec<DayEntry> = schedule
            .periods_grouped_by_day()
            .into_iter()
            .map(|(weekday, periods)| DayEntry {
                weekday: weekday_name(weekday).name,
                periods: periods.into_iter().map(PeriodEntry::from).collect(),
            })
            .collect();

        Self {
            schedule: ScheduleInfo::from_schedule(schedule),
            days,
        }
    }
}

/// One holiday of `holidays`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayEntry {
    pub name: String,
    pub date_start: String,
    pub date_end: String,
    /// Whether the holiday is in effect today.
    pub active: bool,
}

impl HolidayEntry {
    fn new(holiday: &Holiday, today: NaiveDate) -> Self {
        Self {
            name: holiday.name().to_string(),
            date_start: holiday.date_start().to_string(),
            date_end: holiday.date_end().to_string(),
            active: holiday.is_active_on(today),
        }
    }
}

/// Response of `holidays`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidaysResponse {
    #[serde(flatten)]
    pub schedule: ScheduleInfo,
    pub holidays: Vec<HolidayEntry>,
}

impl HolidaysResponse {
    pub fn new(schedule: &Schedule, today: NaiveDate) -> Self {
        Self {
            schedule: ScheduleInfo::from_schedule(schedule),
            holidays: schedule
                .holidays()
                .iter()
                .map(|holiday| HolidayEntry::new(holiday, today))
                .collect(),
        }
    }
}

/// Response of `import`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportResponse {
    pub imported: usize,
}

/// Renders a response for a terminal.
pub trait RenderText {
    fn render_text(&self) -> String;
}

impl RenderText for StatusResponse {
    fn render_text(&self) -> String {
        let state: String = match (&self.holiday, self.open) {
            (Some(holiday), _) => format!("Closed (holiday: {holiday})"),
            (None, true) => String::from("Open"),
            (None, false) => String::from("Closed"),
        };
        format!(
            "{}\n{} at {}",
            self.schedule.header(),
            state,
            self.at.format(INSTANT_FORMAT)
        )
    }
}

impl RenderText for NextResponse {
    fn render_text(&self) -> String {
        format!(
            "{}\nNext opening: {} {}-{}",
            self.schedule.header(),
            self.weekday,
            self.start.format(INSTANT_FORMAT),
            self.end.format(TIME_FORMAT)
        )
    }
}

impl RenderText for WeekResponse {
    fn render_text(&self) -> String {
        let mut text: String = self.schedule.header();
        for day in &self.days {
            let ranges: Vec<String> = day
                .periods
                .iter()
                .filter(|period| !period.placeholder)
                .map(|period| format!("{}-{}", period.start, period.end))
                .collect();

            let hours: String = if ranges.is_empty() {
                String::from("closed")
            } else {
                ranges.join(", ")
            };
            text.push_str(&format!("\n{:<10} {}", day.weekday, hours));
        }
        text
    }
}

impl RenderText for HolidaysResponse {
    fn render_text(&self) -> String {
        let mut text: String = self.schedule.header();
        if self.holidays.is_empty() {
            text.push_str("\nNo holidays");
        }
        for holiday in &self.holidays {
            text.push_str(&format!(
                "\n{}: {} to {}{}",
                holiday.name,
                holiday.date_start,
                holiday.date_end,
                if holiday.active { " (current)" } else { "" }
            ));
        }
        text
    }
}

impl RenderText for ImportResponse {
    fn render_text(&self) -> String {
        format!("Imported {} record(s)", self.imported)
    }
}
