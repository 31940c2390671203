// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod validation;

use crate::{Position, Section, TimeBlock, WeekSchedule, Weekday};
use chrono::NaiveTime;

/// Builds a wall-clock time for test fixtures.
pub(crate) fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Builds an empty time block for test fixtures.
pub(crate) fn block(id: &str, start: (u32, u32), end: (u32, u32)) -> TimeBlock {
    TimeBlock::new(
        id.to_owned(),
        Weekday::Monday,
        time(start.0, start.1),
        time(end.0, end.1),
    )
    .unwrap()
}

/// Builds an unassigned FOH position for test fixtures.
pub(crate) fn position(id: &str, name: &str, count: u32) -> Position {
    Position::new(
        id.to_owned(),
        name.to_owned(),
        String::from("Register"),
        Section::Foh,
        String::from("#2e7d32"),
        count,
    )
}

/// Builds a week schedule with one Monday block holding the given
/// positions.
pub(crate) fn monday_schedule(time_block: TimeBlock, positions: Vec<Position>) -> WeekSchedule {
    let mut schedule: WeekSchedule = WeekSchedule::new();
    let mut time_block: TimeBlock = time_block;
    time_block.positions = positions;
    schedule.add_time_block(Weekday::Monday, time_block);
    schedule
}
