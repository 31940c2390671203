// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{UploadedScheduleEntry, WeekSchedule, Weekday};
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Number of days between a weekly setup's start and end date (inclusive
/// seven-day span).
const WEEK_SPAN_DAYS: u64 = 6;

/// Represents a named, reusable week-schedule blueprint.
///
/// Templates carry no date range and no assignments: positions hold
/// capacity only. They are stamped out into dated [`WeeklySetup`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// The server-assigned identifier. `None` until first persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The template display name.
    pub name: String,
    /// The blueprint schedule. Assignments are always absent.
    pub week_schedule: WeekSchedule,
    /// Server-assigned creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Server-assigned last-update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Template {
    /// Creates a new unpersisted `Template`.
    ///
    /// Any residual assignments in the schedule are stripped; a template
    /// never carries an `employee_id`.
    #[must_use]
    pub fn new(name: String, mut week_schedule: WeekSchedule) -> Self {
        week_schedule.clear_assignments();
        Self {
            id: None,
            name,
            week_schedule,
            created_at: None,
            updated_at: None,
        }
    }

    /// Creates a `Template` from an existing weekly setup ("save as
    /// template").
    ///
    /// The setup's schedule is deep-copied and every assignment stripped;
    /// the source setup is left untouched.
    #[must_use]
    pub fn from_setup(setup: &WeeklySetup, name: String) -> Self {
        Self::new(name, setup.week_schedule.clone())
    }
}

/// Represents a concrete, dated instance of a week schedule with real
/// employee assignments.
///
/// A weekly setup owns its schedule exclusively: instantiating a template
/// deep-copies, so later edits never reach back into the source template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySetup {
    /// The server-assigned identifier. `None` until first persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The setup display name.
    pub name: String,
    /// First day of the covered week.
    pub start_date: NaiveDate,
    /// Last day of the covered week. Always `start_date + 6 days`.
    pub end_date: NaiveDate,
    /// The concrete schedule; positions may carry assignments.
    pub week_schedule: WeekSchedule,
    /// Auxiliary uploaded-schedule rows from the HR export.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uploaded_schedules: Vec<UploadedScheduleEntry>,
    /// Server-assigned creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Server-assigned last-update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl WeeklySetup {
    /// Creates a new unpersisted `WeeklySetup`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` unless
    /// `end_date == start_date + 6 days`.
    pub fn new(
        name: String,
        week_schedule: WeekSchedule,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        validate_date_range(start_date, end_date)?;
        Ok(Self {
            id: None,
            name,
            start_date,
            end_date,
            week_schedule,
            uploaded_schedules: Vec::new(),
            created_at: None,
            updated_at: None,
        })
    }

    /// Instantiates a template for a concrete week.
    ///
    /// The template's schedule is deep-cloned, residual assignments are
    /// stripped, and `end_date` is computed as `start_date + 6 days`. The
    /// weekday each calendar date falls on is exposed by [`Self::date_of`];
    /// the schedule itself stays keyed by absolute weekday, so
    /// `start_date`'s weekday lines up with the matching day schedule.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if the end date cannot
    /// be represented.
    pub fn from_template(
        template: &Template,
        name: String,
        start_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        let end_date: NaiveDate = start_date
            .checked_add_days(Days::new(WEEK_SPAN_DAYS))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("computing the end date for a week starting {start_date}"),
            })?;
        let mut week_schedule: WeekSchedule = template.week_schedule.clone();
        week_schedule.clear_assignments();
        Ok(Self {
            id: None,
            name,
            start_date,
            end_date,
            week_schedule,
            uploaded_schedules: Vec::new(),
            created_at: None,
            updated_at: None,
        })
    }

    /// Validates the seven-day span invariant.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` unless
    /// `end_date == start_date + 6 days`.
    pub fn validate_dates(&self) -> Result<(), DomainError> {
        validate_date_range(self.start_date, self.end_date)
    }

    /// Returns the calendar date a weekday key falls on within this
    /// setup's week.
    ///
    /// The seven-day span covers each weekday exactly once, so the lookup
    /// is total.
    #[must_use]
    pub fn date_of(&self, day: Weekday) -> NaiveDate {
        self.start_date
            .iter_days()
            .take(7)
            .find(|date| Weekday::from(date.weekday()) == day)
            .unwrap_or(self.start_date)
    }
}

fn validate_date_range(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), DomainError> {
    let expected: Option<NaiveDate> = start_date.checked_add_days(Days::new(WEEK_SPAN_DAYS));
    if expected != Some(end_date) {
        return Err(DomainError::InvalidDateRange {
            start_date,
            end_date,
        });
    }
    Ok(())
}
