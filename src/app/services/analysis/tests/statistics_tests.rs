//! Tests for summary statistics

use super::super::aggregator::aggregate;
use super::super::statistics::compute;
use super::{arb_slots, create_test_schedule, schedule_from_slots};
use crate::app::models::{Statistics, WeeklySchedule};
use proptest::prelude::*;

#[test]
fn test_statistics_of_test_schedule() {
    let schedule = create_test_schedule();
    let (professors, subjects) = aggregate(&schedule);

    assert_eq!(
        compute(&schedule, &professors, &subjects),
        Statistics {
            total_subjects: 3,
            total_professors: 3,
            active_days: 2,
            total_sessions: 6,
        }
    );
}

#[test]
fn test_statistics_of_empty_schedule() {
    let stats = compute(&WeeklySchedule::new(), &[], &[]);
    assert_eq!(stats, Statistics::default());
}

proptest! {
    #[test]
    fn total_sessions_is_sum_of_slot_lengths(slots in arb_slots()) {
        let schedule = schedule_from_slots(&slots);
        let expected: usize = slots.iter().map(|(_, _, sessions)| sessions.len()).sum();
        let mut active: Vec<usize> = slots.iter().map(|(day, _, _)| *day).collect();
        active.sort_unstable();
        active.dedup();

        let (professors, subjects) = aggregate(&schedule);
        let stats = compute(&schedule, &professors, &subjects);

        prop_assert_eq!(stats.total_sessions, expected);
        prop_assert_eq!(stats.active_days, active.len());
        prop_assert_eq!(stats.total_professors, professors.len());
        prop_assert_eq!(stats.total_subjects, subjects.len());
    }
}
