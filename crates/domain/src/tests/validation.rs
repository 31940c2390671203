// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{block, monday_schedule, position};
use crate::{
    AssignmentCandidate, DomainError, Position, TimeBlock, WeekSchedule, Weekday,
    validate_assignment, validate_week_schedule,
};

fn candidate(employee: &str, time_block: &str, position: &str) -> AssignmentCandidate {
    AssignmentCandidate {
        employee_id: employee.to_owned(),
        day: Weekday::Monday,
        time_block_id: time_block.to_owned(),
        position_id: position.to_owned(),
    }
}

/// Builds the standard two-block Monday used by the overlap tests:
/// block `a` `[09:00,13:00)` staffed by `emp-1`, block `b` `[12:00,16:00)`
/// with one open register.
fn overlapping_monday() -> WeekSchedule {
    let mut staffed: Position = position("p1", "Register 1", 1);
    staffed.employee_id = Some(String::from("emp-1"));
    let mut schedule: WeekSchedule = monday_schedule(block("a", (9, 0), (13, 0)), vec![staffed]);

    let mut second: TimeBlock = block("b", (12, 0), (16, 0));
    second.positions.push(position("p2", "Register 2", 1));
    schedule.add_time_block(Weekday::Monday, second);
    schedule
}

#[test]
fn test_validate_week_schedule_accepts_valid_schedule() {
    let schedule: WeekSchedule = monday_schedule(
        block("a", (9, 0), (13, 0)),
        vec![position("p1", "Register 1", 2)],
    );
    assert!(validate_week_schedule(&schedule).is_ok());
}

#[test]
fn test_validate_week_schedule_rejects_inverted_block() {
    let mut schedule: WeekSchedule = WeekSchedule::new();
    let mut inverted: TimeBlock = block("a", (9, 0), (13, 0));
    inverted.end = inverted.start;
    schedule.add_time_block(Weekday::Tuesday, inverted);

    let result: Result<(), DomainError> = validate_week_schedule(&schedule);
    assert!(matches!(
        result,
        Err(DomainError::InvalidTimeBlock {
            day: Weekday::Tuesday,
            ..
        })
    ));
}

#[test]
fn test_validate_week_schedule_rejects_zero_capacity() {
    let mut zero: Position = position("p1", "Register 1", 1);
    zero.count = 0;
    let schedule: WeekSchedule = monday_schedule(block("a", (9, 0), (13, 0)), vec![zero]);

    let result: Result<(), DomainError> = validate_week_schedule(&schedule);
    assert!(matches!(
        result,
        Err(DomainError::InvalidPositionCount { .. })
    ));
}

#[test]
fn test_overlapping_blocks_reject_same_employee() {
    let schedule: WeekSchedule = overlapping_monday();

    // emp-1 works [09:00,13:00); [12:00,16:00) overlaps at [12:00,13:00)
    let result: Result<(), DomainError> = validate_assignment(&schedule, &candidate("emp-1", "b", "p2"));
    assert!(matches!(
        result,
        Err(DomainError::AssignmentConflict { ref time_block, .. }) if time_block == "a"
    ));
}

#[test]
fn test_adjacent_blocks_admit_same_employee() {
    let mut schedule: WeekSchedule = overlapping_monday();
    let mut closing: TimeBlock = block("c", (13, 0), (17, 0));
    closing.positions.push(position("p3", "Register 3", 1));
    schedule.add_time_block(Weekday::Monday, closing);

    // [13:00,17:00) touches [09:00,13:00) only at the boundary
    assert!(validate_assignment(&schedule, &candidate("emp-1", "c", "p3")).is_ok());
}

#[test]
fn test_overlapping_blocks_admit_different_employee() {
    let schedule: WeekSchedule = overlapping_monday();
    assert!(validate_assignment(&schedule, &candidate("emp-2", "b", "p2")).is_ok());
}

#[test]
fn test_same_block_other_position_is_not_a_conflict() {
    // The target block is excluded from the overlap scan; double-booking
    // within one block is governed by capacity, not overlap.
    let mut staffed: Position = position("p1", "Register 1", 1);
    staffed.employee_id = Some(String::from("emp-1"));
    let schedule: WeekSchedule = monday_schedule(
        block("a", (9, 0), (13, 0)),
        vec![staffed, position("p2", "Register 2", 1)],
    );

    assert!(validate_assignment(&schedule, &candidate("emp-1", "a", "p2")).is_ok());
}

#[test]
fn test_conflict_is_scoped_to_one_day() {
    let mut staffed: Position = position("p1", "Register 1", 1);
    staffed.employee_id = Some(String::from("emp-1"));
    let mut schedule: WeekSchedule = monday_schedule(block("a", (9, 0), (13, 0)), vec![staffed]);

    let mut tuesday: TimeBlock = block("b", (9, 0), (13, 0));
    tuesday.positions.push(position("p2", "Register 2", 1));
    schedule.add_time_block(Weekday::Tuesday, tuesday);

    let mut tuesday_candidate: AssignmentCandidate = candidate("emp-1", "b", "p2");
    tuesday_candidate.day = Weekday::Tuesday;
    assert!(validate_assignment(&schedule, &tuesday_candidate).is_ok());
}

#[test]
fn test_full_position_rejects_other_employee() {
    let mut staffed: Position = position("p1", "Register 1", 1);
    staffed.employee_id = Some(String::from("emp-x"));
    let schedule: WeekSchedule = monday_schedule(block("a", (9, 0), (13, 0)), vec![staffed]);

    let result: Result<(), DomainError> = validate_assignment(&schedule, &candidate("emp-y", "a", "p1"));
    assert!(matches!(
        result,
        Err(DomainError::PositionFull { count: 1, .. })
    ));
}

#[test]
fn test_reassigning_current_occupant_is_idempotent() {
    let mut staffed: Position = position("p1", "Register 1", 1);
    staffed.employee_id = Some(String::from("emp-x"));
    let schedule: WeekSchedule = monday_schedule(block("a", (9, 0), (13, 0)), vec![staffed]);

    assert!(validate_assignment(&schedule, &candidate("emp-x", "a", "p1")).is_ok());
}

#[test]
fn test_unknown_time_block_fails() {
    let schedule: WeekSchedule = WeekSchedule::new();
    let result: Result<(), DomainError> = validate_assignment(&schedule, &candidate("emp-1", "a", "p1"));
    assert!(matches!(result, Err(DomainError::TimeBlockNotFound { .. })));
}

#[test]
fn test_unknown_position_fails() {
    let schedule: WeekSchedule = monday_schedule(block("a", (9, 0), (13, 0)), Vec::new());
    let result: Result<(), DomainError> = validate_assignment(&schedule, &candidate("emp-1", "a", "p9"));
    assert!(matches!(result, Err(DomainError::PositionNotFound { .. })));
}

#[test]
fn test_validator_does_not_mutate_the_schedule() {
    let schedule: WeekSchedule = overlapping_monday();
    let before: WeekSchedule = schedule.clone();

    let _admitted = validate_assignment(&schedule, &candidate("emp-2", "b", "p2"));
    let _rejected = validate_assignment(&schedule, &candidate("emp-1", "b", "p2"));

    assert_eq!(schedule, before);
}
