// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Represents a restaurant section.
///
/// Every position and employee belongs to exactly one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Front of house (registers, dining room, drive-thru).
    #[serde(rename = "FOH")]
    Foh,
    /// Back of house (kitchen, prep, dish).
    #[serde(rename = "BOH")]
    Boh,
}

impl Section {
    /// Parses a section from its wire label.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is not `FOH` or `BOH`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "FOH" => Ok(Self::Foh),
            "BOH" => Ok(Self::Boh),
            _ => Err(DomainError::InvalidSection(format!(
                "Unknown section: {s}"
            ))),
        }
    }

    /// Returns the wire label for this section.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Foh => "FOH",
            Self::Boh => "BOH",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a weekday key of a week schedule.
///
/// The declaration order (Sunday first) is the canonical storage order;
/// display order is a per-store convention (see [`Weekday::week_from`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Sunday.
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

impl Weekday {
    /// All seven weekdays in canonical (Sunday-first) order.
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Parses a weekday from its lowercase wire name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name does not match a weekday.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "sunday" => Ok(Self::Sunday),
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            _ => Err(DomainError::InvalidWeekday(format!(
                "Unknown weekday: {s}"
            ))),
        }
    }

    /// Returns the lowercase wire name of this weekday.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }

    /// Returns the seven weekdays in display order for a store whose week
    /// starts on `first`.
    ///
    /// Stores differ on whether the printed setup sheet leads with Sunday
    /// or Monday; the underlying data is always keyed by absolute weekday.
    #[must_use]
    pub fn week_from(first: Self) -> [Self; 7] {
        let start: usize = first as usize;
        std::array::from_fn(|i| Self::ALL[(start + i) % 7])
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sunday => Self::Sun,
            Weekday::Monday => Self::Mon,
            Weekday::Tuesday => Self::Tue,
            Weekday::Wednesday => Self::Wed,
            Weekday::Thursday => Self::Thu,
            Weekday::Friday => Self::Fri,
            Weekday::Saturday => Self::Sat,
        }
    }
}

/// Represents an employee from the HR directory.
///
/// Employees are owned by a separate subsystem and are read-only here;
/// they exist to populate assignment candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// The employee identifier.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// Scheduled shift start (wall clock).
    pub shift_start: NaiveTime,
    /// Scheduled shift end (wall clock).
    pub shift_end: NaiveTime,
    /// The section the employee works in.
    pub area: Section,
    /// Optional day pin, when the employee only works one day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<Weekday>,
}

/// Represents a staffing slot within a time block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// The position identifier, unique within its time block.
    pub id: String,
    /// The position display name.
    pub name: String,
    /// Free-form category label, e.g. "Register" or "Grill".
    pub category: String,
    /// The section this position belongs to.
    pub section: Section,
    /// Display hint for the setup-sheet grid.
    pub color: String,
    /// Number of simultaneous employees this slot accepts.
    pub count: u32,
    /// The assigned employee. Set only on weekly-setup instances; templates
    /// carry capacity only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

impl Position {
    /// Creates a new unassigned `Position`.
    #[must_use]
    pub const fn new(
        id: String,
        name: String,
        category: String,
        section: Section,
        color: String,
        count: u32,
    ) -> Self {
        Self {
            id,
            name,
            category,
            section,
            color,
            count,
            employee_id: None,
        }
    }

    /// Returns whether an employee is currently assigned to this position.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.employee_id.is_some()
    }
}

/// Represents a bounded time interval on one day, containing an ordered
/// set of positions.
///
/// Each block owns its position instances; position ids do not persist
/// across blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlock {
    /// The block identifier, unique within its day.
    pub id: String,
    /// Block start (wall clock, same day as `end`).
    pub start: NaiveTime,
    /// Block end (wall clock, strictly after `start`).
    pub end: NaiveTime,
    /// The positions staffed during this block, in display order.
    #[serde(default)]
    pub positions: Vec<Position>,
}

impl TimeBlock {
    /// Creates a new empty `TimeBlock`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not strictly before `end`.
    pub fn new(
        id: String,
        day: Weekday,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::InvalidTimeBlock {
                day,
                time_block: id,
                start,
                end,
            });
        }
        Ok(Self {
            id,
            start,
            end,
            positions: Vec::new(),
        })
    }

    /// Tests interval overlap against another block using half-open
    /// semantics: `[s1,e1)` and `[s2,e2)` overlap iff `s1 < e2 && s2 < e1`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Looks up a position by id.
    #[must_use]
    pub fn position(&self, position_id: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.id == position_id)
    }
}

/// Represents the ordered set of time blocks for one calendar day.
///
/// Blocks need not be disjoint; an opening and a mid-shift block may
/// overlap. Employee-level disjointness is enforced by the conflict
/// validator, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    /// The day's time blocks, in display order.
    #[serde(default)]
    pub time_blocks: Vec<TimeBlock>,
}

impl DaySchedule {
    /// Creates a new empty `DaySchedule`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            time_blocks: Vec::new(),
        }
    }

    /// Looks up a time block by id.
    #[must_use]
    pub fn time_block(&self, time_block_id: &str) -> Option<&TimeBlock> {
        self.time_blocks.iter().find(|b| b.id == time_block_id)
    }
}

/// Represents a full week of day schedules, keyed by weekday.
///
/// # Invariant
///
/// All seven weekday keys are always present, possibly with an empty
/// time-block list. Every constructor upholds this, including
/// deserialization from partial input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekSchedule {
    days: BTreeMap<Weekday, DaySchedule>,
}

impl WeekSchedule {
    /// Creates a new `WeekSchedule` with seven empty day schedules.
    #[must_use]
    pub fn new() -> Self {
        Self::from_days(BTreeMap::new())
    }

    /// Creates a `WeekSchedule` from a possibly partial weekday map,
    /// filling any missing day with an empty schedule.
    #[must_use]
    pub fn from_days(mut days: BTreeMap<Weekday, DaySchedule>) -> Self {
        for day in Weekday::ALL {
            days.entry(day).or_default();
        }
        Self { days }
    }

    /// Creates a `WeekSchedule` from a weekday map, rejecting partial input.
    ///
    /// This is the strict construction path used when accepting a schedule
    /// from a caller: the map must carry all seven weekday keys.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSchedule` naming the first missing day.
    pub fn try_from_days(days: BTreeMap<Weekday, DaySchedule>) -> Result<Self, DomainError> {
        for day in Weekday::ALL {
            if !days.contains_key(&day) {
                return Err(DomainError::InvalidSchedule { missing: day });
            }
        }
        Ok(Self { days })
    }

    /// Returns the schedule for one day.
    #[must_use]
    pub fn day(&self, day: Weekday) -> &DaySchedule {
        static EMPTY: DaySchedule = DaySchedule::new();
        self.days.get(&day).unwrap_or(&EMPTY)
    }

    /// Iterates the seven day schedules in canonical (Sunday-first) order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        self.days.iter().map(|(day, schedule)| (*day, schedule))
    }

    /// Appends a time block to one day.
    pub fn add_time_block(&mut self, day: Weekday, time_block: TimeBlock) {
        self.day_mut(day).time_blocks.push(time_block);
    }

    /// Removes a time block from one day.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TimeBlockNotFound` if the block id is unknown.
    pub fn remove_time_block(
        &mut self,
        day: Weekday,
        time_block_id: &str,
    ) -> Result<(), DomainError> {
        let blocks: &mut Vec<TimeBlock> = &mut self.day_mut(day).time_blocks;
        let index: usize = blocks
            .iter()
            .position(|b| b.id == time_block_id)
            .ok_or_else(|| DomainError::TimeBlockNotFound {
                day,
                time_block: time_block_id.to_owned(),
            })?;
        blocks.remove(index);
        Ok(())
    }

    /// Appends a position to a time block.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TimeBlockNotFound` if the block id is unknown.
    pub fn add_position(
        &mut self,
        day: Weekday,
        time_block_id: &str,
        position: Position,
    ) -> Result<(), DomainError> {
        let block: &mut TimeBlock = self.time_block_mut(day, time_block_id)?;
        block.positions.push(position);
        Ok(())
    }

    /// Removes a position from a time block.
    ///
    /// # Errors
    ///
    /// Returns an error if the block or position id is unknown.
    pub fn remove_position(
        &mut self,
        day: Weekday,
        time_block_id: &str,
        position_id: &str,
    ) -> Result<(), DomainError> {
        let block: &mut TimeBlock = self.time_block_mut(day, time_block_id)?;
        let index: usize = block
            .positions
            .iter()
            .position(|p| p.id == position_id)
            .ok_or_else(|| DomainError::PositionNotFound {
                day,
                time_block: time_block_id.to_owned(),
                position: position_id.to_owned(),
            })?;
        block.positions.remove(index);
        Ok(())
    }

    /// Sets or clears the employee assignment of a position.
    ///
    /// This is a plain structural mutation; conflict admission is the
    /// caller's responsibility and happens before this is invoked.
    ///
    /// # Errors
    ///
    /// Returns an error if the block or position id is unknown.
    pub fn set_assignment(
        &mut self,
        day: Weekday,
        time_block_id: &str,
        position_id: &str,
        employee_id: Option<&str>,
    ) -> Result<(), DomainError> {
        let block: &mut TimeBlock = self.time_block_mut(day, time_block_id)?;
        let position: &mut Position = block
            .positions
            .iter_mut()
            .find(|p| p.id == position_id)
            .ok_or_else(|| DomainError::PositionNotFound {
                day,
                time_block: time_block_id.to_owned(),
                position: position_id.to_owned(),
            })?;
        position.employee_id = employee_id.map(str::to_owned);
        Ok(())
    }

    /// Clears every employee assignment in the week.
    pub fn clear_assignments(&mut self) {
        for schedule in self.days.values_mut() {
            for block in &mut schedule.time_blocks {
                for position in &mut block.positions {
                    position.employee_id = None;
                }
            }
        }
    }

    fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        self.days.entry(day).or_default()
    }

    fn time_block_mut(
        &mut self,
        day: Weekday,
        time_block_id: &str,
    ) -> Result<&mut TimeBlock, DomainError> {
        self.day_mut(day)
            .time_blocks
            .iter_mut()
            .find(|b| b.id == time_block_id)
            .ok_or_else(|| DomainError::TimeBlockNotFound {
                day,
                time_block: time_block_id.to_owned(),
            })
    }
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self::new()
    }
}

// Deserialization is deliberately lenient: a payload missing weekday keys
// still constructs a complete week. The strict path is `try_from_days`.
impl<'de> Deserialize<'de> for WeekSchedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let days: BTreeMap<Weekday, DaySchedule> = BTreeMap::deserialize(deserializer)?;
        Ok(Self::from_days(days))
    }
}

/// Represents one row of auxiliary uploaded-schedule data attached to a
/// weekly setup.
///
/// Rows come from an upstream HR export and may carry arbitrary extra
/// columns. The payload-size safeguard may drop the extras; `id`, `name`,
/// `time_block`, `area` and `day` are always preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedScheduleEntry {
    /// The employee identifier from the upload.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// Free-form shift label from the export, e.g. "9:00 AM - 5:00 PM".
    pub time_block: String,
    /// The section the row applies to.
    pub area: Section,
    /// Optional day the row applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<Weekday>,
    /// Any additional columns carried by the upload.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl UploadedScheduleEntry {
    /// Returns a copy reduced to the minimal fields required to
    /// reconstruct assignments.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            time_block: self.time_block.clone(),
            area: self.area,
            day: self.day,
            extra: BTreeMap::new(),
        }
    }
}
