// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Position, TimeBlock, WeekSchedule, Weekday};

/// A candidate employee-to-position assignment to be checked against an
/// existing week schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentCandidate {
    /// The employee to assign.
    pub employee_id: String,
    /// The day of the target time block.
    pub day: Weekday,
    /// The target time block identifier.
    pub time_block_id: String,
    /// The target position identifier within the block.
    pub position_id: String,
}

/// Validates the structural rules of a week schedule.
///
/// Checks that every time block satisfies `start < end` and that every
/// position accepts at least one employee. Seven-day completeness is
/// upheld by [`WeekSchedule`] construction and is not re-checked here.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Errors
///
/// Returns an error naming the first offending block or position.
pub fn validate_week_schedule(schedule: &WeekSchedule) -> Result<(), DomainError> {
    for (day, day_schedule) in schedule.iter() {
        for block in &day_schedule.time_blocks {
            // Rule: blocks are same-day wall-clock intervals, start < end
            if block.start >= block.end {
                return Err(DomainError::InvalidTimeBlock {
                    day,
                    time_block: block.id.clone(),
                    start: block.start,
                    end: block.end,
                });
            }

            // Rule: capacity is at least one
            for position in &block.positions {
                if position.count == 0 {
                    return Err(DomainError::InvalidPositionCount {
                        position: position.name.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Determines whether a candidate assignment is admissible against an
/// existing week schedule.
///
/// The check runs in two stages:
///
/// 1. Every other time block on the candidate day in which the employee
///    already holds a position is tested for half-open interval overlap
///    against the target block; any overlap rejects the assignment.
/// 2. The target position's occupancy is checked against its capacity;
///    a full position rejects the assignment unless the occupant is the
///    candidate employee (re-assignment is idempotent).
///
/// This function is pure and synchronous: it never mutates the schedule
/// and never touches the network, so callers can give instant feedback
/// before a save round-trip. The caller performs the mutation on
/// admission.
///
/// # Errors
///
/// * `DomainError::TimeBlockNotFound` / `PositionNotFound` for an unknown target
/// * `DomainError::AssignmentConflict` when the employee already works an
///   overlapping block on that day
/// * `DomainError::PositionFull` when the target position is at capacity
pub fn validate_assignment(
    schedule: &WeekSchedule,
    candidate: &AssignmentCandidate,
) -> Result<(), DomainError> {
    let day_schedule = schedule.day(candidate.day);

    let target_block: &TimeBlock = day_schedule
        .time_block(&candidate.time_block_id)
        .ok_or_else(|| DomainError::TimeBlockNotFound {
            day: candidate.day,
            time_block: candidate.time_block_id.clone(),
        })?;

    let target_position: &Position = target_block
        .position(&candidate.position_id)
        .ok_or_else(|| DomainError::PositionNotFound {
            day: candidate.day,
            time_block: candidate.time_block_id.clone(),
            position: candidate.position_id.clone(),
        })?;

    // Rule: one employee may not hold two positions whose blocks overlap
    // on the same day. The target block itself is excluded.
    for block in &day_schedule.time_blocks {
        if block.id == candidate.time_block_id {
            continue;
        }
        let holds_position: bool = block
            .positions
            .iter()
            .any(|p| p.employee_id.as_deref() == Some(candidate.employee_id.as_str()));
        if holds_position && block.overlaps(target_block) {
            return Err(DomainError::AssignmentConflict {
                employee_id: candidate.employee_id.clone(),
                day: candidate.day,
                time_block: block.id.clone(),
                start: block.start,
                end: block.end,
            });
        }
    }

    // Rule: occupancy (occupants other than the candidate) must stay
    // below capacity. Re-assigning the current occupant is admitted.
    let occupancy: u32 = u32::from(
        target_position
            .employee_id
            .as_deref()
            .is_some_and(|occupant| occupant != candidate.employee_id),
    );
    if occupancy >= target_position.count {
        return Err(DomainError::PositionFull {
            position: target_position.name.clone(),
            count: target_position.count,
        });
    }

    Ok(())
}
