//! Tests for professor and subject aggregation

use super::super::aggregator::aggregate;
use super::{arb_slots, create_test_schedule, schedule_from_slots};
use crate::app::models::{Professor, Subject};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn names(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_subjects_in_first_seen_order() {
    let (_, subjects) = aggregate(&create_test_schedule());

    let subject_names: Vec<&str> = subjects.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(subject_names, vec!["Algorithms", "Networks", "Compilation"]);

    assert_eq!(
        subjects[0],
        Subject {
            name: "Algorithms".to_string(),
            professors: names(&["Haddad", "Smith"]),
            types: names(&["Course", "Directed Work"]),
        }
    );
    assert!(subjects[2].professors.is_empty());
    assert!(subjects[2].types.is_empty());
}

#[test]
fn test_professors_cross_reference_subjects() {
    let (professors, _) = aggregate(&create_test_schedule());

    assert_eq!(
        professors,
        vec![
            Professor {
                name: "Smith".to_string(),
                subjects: names(&["Algorithms"]),
            },
            Professor {
                name: "Benali".to_string(),
                subjects: names(&["Networks"]),
            },
            Professor {
                name: "Haddad".to_string(),
                subjects: names(&["Algorithms"]),
            },
        ]
    );
}

#[test]
fn test_sessions_without_course_add_no_subject_or_professor() {
    let (professors, subjects) = aggregate(&create_test_schedule());

    assert!(professors.iter().all(|p| p.name != "Ghost"));
    assert!(subjects.iter().all(|s| !s.name.is_empty()));
}

proptest! {
    #[test]
    fn aggregation_is_deterministic(slots in arb_slots()) {
        let schedule = schedule_from_slots(&slots);
        prop_assert_eq!(aggregate(&schedule), aggregate(&schedule));
    }

    #[test]
    fn aggregation_ignores_session_order(slots in arb_slots()) {
        let forward = schedule_from_slots(&slots);
        let reversed_slots: Vec<_> = slots
            .iter()
            .rev()
            .map(|(day, index, sessions)| {
                (*day, *index, sessions.iter().rev().cloned().collect::<Vec<_>>())
            })
            .collect();
        let reversed = schedule_from_slots(&reversed_slots);

        let (mut professors_a, mut subjects_a) = aggregate(&forward);
        let (mut professors_b, mut subjects_b) = aggregate(&reversed);
        professors_a.sort_by(|a, b| a.name.cmp(&b.name));
        professors_b.sort_by(|a, b| a.name.cmp(&b.name));
        subjects_a.sort_by(|a, b| a.name.cmp(&b.name));
        subjects_b.sort_by(|a, b| a.name.cmp(&b.name));

        prop_assert_eq!(professors_a, professors_b);
        prop_assert_eq!(subjects_a, subjects_b);
    }
}
