//! Test utilities for entity aggregation and statistics

use crate::app::models::{Day, Session, SlotEntry, WeeklySchedule};
use crate::constants::TIME_SLOTS;
use proptest::prelude::*;

// Test modules
mod aggregator_tests;
mod statistics_tests;

pub fn session(course: &str, session_type: &str, professor: Option<&str>) -> Session {
    Session {
        course: course.to_string(),
        session_type: session_type.to_string(),
        professor: professor.map(str::to_string),
        ..Default::default()
    }
}

pub fn slot(index: usize, sessions: Vec<Session>) -> SlotEntry {
    SlotEntry {
        time: TIME_SLOTS[index].to_string(),
        sessions,
    }
}

/// Saturday and Monday populated, Algorithms taught by two professors
pub fn create_test_schedule() -> WeeklySchedule {
    let mut schedule = WeeklySchedule::new();
    schedule.push_slot(
        Day::Saturday,
        slot(
            0,
            vec![
                session("Algorithms", "Course", Some("Smith")),
                session("Networks", "Practical Work", Some("Benali")),
            ],
        ),
    );
    schedule.push_slot(
        Day::Saturday,
        slot(2, vec![session("Algorithms", "Directed Work", Some("Haddad"))]),
    );
    schedule.push_slot(
        Day::Monday,
        slot(
            1,
            vec![
                session("Algorithms", "Course", Some("Smith")),
                session("Compilation", "", None),
                session("", "Course", Some("Ghost")),
            ],
        ),
    );
    schedule
}

pub fn arb_session() -> impl Strategy<Value = Session> {
    (
        prop::sample::select(vec!["", "Algorithms", "Networks", "Compilation", "Databases"]),
        prop::sample::select(vec!["", "Course", "Directed Work", "Practical Work"]),
        prop::option::of(prop::sample::select(vec!["Smith", "Benali", "Haddad"])),
    )
        .prop_map(|(course, session_type, professor)| session(course, session_type, professor))
}

/// Slots as (day index, slot index, sessions); slot sessions are non-empty
pub fn arb_slots() -> impl Strategy<Value = Vec<(usize, usize, Vec<Session>)>> {
    prop::collection::vec(
        (0usize..7, 0usize..6, prop::collection::vec(arb_session(), 1..5)),
        0..20,
    )
}

/// Build a schedule from generated slots
pub fn schedule_from_slots(slots: &[(usize, usize, Vec<Session>)]) -> WeeklySchedule {
    let mut schedule = WeeklySchedule::new();
    for (day, index, sessions) in slots {
        schedule.push_slot(Day::ALL[*day], slot(*index, sessions.clone()));
    }
    schedule
}
