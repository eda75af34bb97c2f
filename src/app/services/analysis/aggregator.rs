//! Professor and subject indices
//!
//! One pass over every session of the week builds both indices with their
//! cross-references. Names are deduplicated by exact string equality and
//! entries keep the order in which they were first seen.

use std::collections::HashMap;
use tracing::debug;

use crate::app::models::{Professor, Subject, WeeklySchedule};

/// Insertion-ordered index keyed by entity name
struct NameIndex<T> {
    positions: HashMap<String, usize>,
    entries: Vec<T>,
}

impl<T> NameIndex<T> {
    fn new() -> Self {
        Self {
            positions: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Existing entry for `name`, or a new one built by `create`
    fn entry(&mut self, name: &str, create: impl FnOnce(&str) -> T) -> &mut T {
        let index = match self.positions.get(name).copied() {
            Some(index) => index,
            None => {
                self.entries.push(create(name));
                self.positions.insert(name.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[index]
    }

    fn into_entries(self) -> Vec<T> {
        self.entries
    }
}

/// Build the professor and subject indices of a schedule
pub fn aggregate(schedule: &WeeklySchedule) -> (Vec<Professor>, Vec<Subject>) {
    let mut professors: NameIndex<Professor> = NameIndex::new();
    let mut subjects: NameIndex<Subject> = NameIndex::new();

    for session in schedule.sessions() {
        // A session without a course adds no subject and no professor, even
        // when it names one.
        let course = session.course.as_str();
        if course.is_empty() {
            continue;
        }

        let subject = subjects.entry(course, |name| Subject {
            name: name.to_string(),
            professors: Default::default(),
            types: Default::default(),
        });

        if !session.session_type.is_empty() {
            subject.types.insert(session.session_type.clone());
        }

        if let Some(professor_name) = session.professor_name() {
            subject.professors.insert(professor_name.to_string());

            professors
                .entry(professor_name, |name| Professor {
                    name: name.to_string(),
                    subjects: Default::default(),
                })
                .subjects
                .insert(course.to_string());
        }
    }

    let professors = professors.into_entries();
    let subjects = subjects.into_entries();
    debug!(
        "Aggregated {} professors and {} subjects",
        professors.len(),
        subjects.len()
    );

    (professors, subjects)
}
