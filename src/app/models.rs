//! Core data structures for timetable processing.
//!
//! Defines the raw extraction input, the parsed session records, the weekly
//! schedule they are grouped into, the derived professor/subject indices and
//! the output document assembled from all of them.

use crate::constants::{TIME_SLOTS, header::DATE_FORMAT};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Output of the external document extractor for one input document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawExtraction {
    /// Flat text of every page
    #[serde(default)]
    pub text: String,

    /// Table grid, one vector of optional cell strings per row
    #[serde(default)]
    pub table: Vec<Vec<Option<String>>>,
}

impl RawExtraction {
    pub fn new(text: impl Into<String>, table: Vec<Vec<Option<String>>>) -> Self {
        Self {
            text: text.into(),
            table,
        }
    }

    /// True when neither the text nor the table carries anything
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.table.is_empty()
    }
}

/// Document metadata found in the raw text; every field defaults to empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderInfo {
    pub university: String,
    pub vice_rectorate: String,
    /// Program / speciality label
    pub schedules_of: String,
    /// Academic year as `YYYY/YYYY`
    pub college_year: String,
    pub section: String,
    pub semester: String,
    /// Publication date as `D/M/YYYY`
    pub date: String,
}

impl HeaderInfo {
    /// The header date as a calendar date, when it is one
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }
}

/// Canonical week days, ordered as the timetable lists them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Saturday,
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// Look up a day by its full canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.name() == name)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One class meeting parsed from a table cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Cohort label such as `G1`
    pub group: Option<String>,
    pub room: Option<String>,
    #[serde(default)]
    pub course: String,
    /// Normalized session type, possibly empty
    #[serde(rename = "type", default)]
    pub session_type: String,
    pub professor: Option<String>,
}

impl Session {
    /// The professor name when present and non-blank
    pub fn professor_name(&self) -> Option<&str> {
        self.professor
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Sessions sharing one time slot of one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEntry {
    pub time: String,
    pub sessions: Vec<Session>,
}

/// All slots of the week, keyed by day; every day is always present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    days: BTreeMap<Day, Vec<SlotEntry>>,
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl WeeklySchedule {
    /// Create a schedule with all seven days and no slots
    pub fn new() -> Self {
        Self {
            days: Day::ALL.into_iter().map(|day| (day, Vec::new())).collect(),
        }
    }

    pub fn day(&self, day: Day) -> &[SlotEntry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append a slot entry to a day
    pub fn push_slot(&mut self, day: Day, entry: SlotEntry) {
        self.days.entry(day).or_default().push(entry);
    }

    /// Days with their slots, Saturday first
    pub fn iter(&self) -> impl Iterator<Item = (Day, &[SlotEntry])> {
        self.days.iter().map(|(day, slots)| (*day, slots.as_slice()))
    }

    /// Every session of the week in day, slot and cell order
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.days
            .values()
            .flat_map(|slots| slots.iter().flat_map(|slot| slot.sessions.iter()))
    }

    pub fn session_count(&self) -> usize {
        self.days
            .values()
            .flat_map(|slots| slots.iter())
            .map(|slot| slot.sessions.len())
            .sum()
    }

    /// Restore missing days, e.g. after decoding a document from elsewhere
    pub fn ensure_all_days(&mut self) {
        for day in Day::ALL {
            self.days.entry(day).or_default();
        }
    }
}

/// Professor index entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    pub name: String,
    #[serde(default)]
    pub subjects: BTreeSet<String>,
}

/// Subject index entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    #[serde(default)]
    pub professors: BTreeSet<String>,
    #[serde(default)]
    pub types: BTreeSet<String>,
}

/// Aggregate counts over one parsed document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_subjects: usize,
    pub total_professors: usize,
    pub active_days: usize,
    pub total_sessions: usize,
}

/// The complete structured output of one processing run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    #[serde(flatten)]
    pub header: HeaderInfo,
    #[serde(default = "default_time_slots")]
    pub time_slots: Vec<String>,
    #[serde(default)]
    pub professors: Vec<Professor>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub weekly_schedule: WeeklySchedule,
    #[serde(default)]
    pub statistics: Statistics,
}

impl ScheduleDocument {
    pub fn session_count(&self) -> usize {
        self.weekly_schedule.session_count()
    }
}

/// The fixed slot labels as owned strings
pub fn default_time_slots() -> Vec<String> {
    TIME_SLOTS.iter().map(|slot| slot.to_string()).collect()
}
