//! Summary statistics over a parsed schedule

use crate::app::models::{Professor, Statistics, Subject, WeeklySchedule};

/// Count subjects, professors, active days and sessions
pub fn compute(
    schedule: &WeeklySchedule,
    professors: &[Professor],
    subjects: &[Subject],
) -> Statistics {
    Statistics {
        total_subjects: subjects.len(),
        total_professors: professors.len(),
        active_days: schedule
            .iter()
            .filter(|(_, slots)| !slots.is_empty())
            .count(),
        total_sessions: schedule
            .iter()
            .flat_map(|(_, slots)| slots.iter())
            .map(|slot| slot.sessions.len())
            .sum(),
    }
}
