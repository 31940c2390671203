// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Weekday;
use chrono::{NaiveDate, NaiveTime};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A week schedule is missing one of the seven weekday keys.
    InvalidSchedule {
        /// The first missing weekday.
        missing: Weekday,
    },
    /// A time block does not satisfy `start < end`.
    InvalidTimeBlock {
        /// The day the block belongs to.
        day: Weekday,
        /// The offending block identifier.
        time_block: String,
        /// The block start time.
        start: NaiveTime,
        /// The block end time.
        end: NaiveTime,
    },
    /// A position declares a capacity of zero.
    InvalidPositionCount {
        /// The offending position name.
        position: String,
    },
    /// A weekly setup's date range is not exactly a seven-day span.
    InvalidDateRange {
        /// The start date.
        start_date: NaiveDate,
        /// The end date.
        end_date: NaiveDate,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Section label is not FOH or BOH.
    InvalidSection(String),
    /// Weekday name is not recognized.
    InvalidWeekday(String),
    /// The employee already holds a position in an overlapping time block
    /// on the same day.
    AssignmentConflict {
        /// The employee being assigned.
        employee_id: String,
        /// The day of the candidate assignment.
        day: Weekday,
        /// The conflicting time block identifier.
        time_block: String,
        /// The conflicting block start time.
        start: NaiveTime,
        /// The conflicting block end time.
        end: NaiveTime,
    },
    /// The target position is already at capacity.
    PositionFull {
        /// The position name.
        position: String,
        /// The position capacity.
        count: u32,
    },
    /// Template does not exist.
    TemplateNotFound(String),
    /// Weekly setup does not exist.
    WeeklySetupNotFound(String),
    /// Time block does not exist on the given day.
    TimeBlockNotFound {
        /// The day that was searched.
        day: Weekday,
        /// The missing block identifier.
        time_block: String,
    },
    /// Position does not exist within the given time block.
    PositionNotFound {
        /// The day that was searched.
        day: Weekday,
        /// The block that was searched.
        time_block: String,
        /// The missing position identifier.
        position: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSchedule { missing } => {
                write!(f, "Week schedule is missing the '{missing}' day")
            }
            Self::InvalidTimeBlock {
                day,
                time_block,
                start,
                end,
            } => {
                write!(
                    f,
                    "Time block '{time_block}' on {day} must start before it ends ({start}..{end})"
                )
            }
            Self::InvalidPositionCount { position } => {
                write!(f, "Position '{position}' must accept at least one employee")
            }
            Self::InvalidDateRange {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Date range {start_date}..{end_date} must span exactly seven days"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidSection(msg) => write!(f, "Invalid section: {msg}"),
            Self::InvalidWeekday(msg) => write!(f, "Invalid weekday: {msg}"),
            Self::AssignmentConflict {
                employee_id,
                day,
                time_block,
                start,
                end,
            } => {
                write!(
                    f,
                    "Employee '{employee_id}' already works block '{time_block}' on {day} ({start}..{end})"
                )
            }
            Self::PositionFull { position, count } => {
                write!(
                    f,
                    "Position '{position}' is already at its capacity of {count}"
                )
            }
            Self::TemplateNotFound(id) => write!(f, "Template '{id}' not found"),
            Self::WeeklySetupNotFound(id) => write!(f, "Weekly setup '{id}' not found"),
            Self::TimeBlockNotFound { day, time_block } => {
                write!(f, "Time block '{time_block}' not found on {day}")
            }
            Self::PositionNotFound {
                day,
                time_block,
                position,
            } => {
                write!(
                    f,
                    "Position '{position}' not found in block '{time_block}' on {day}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
