//! Application constants for the timetable processor
//!
//! This module contains the fixed vocabularies of the supported timetable
//! layout: time slots, day labels, session type codes, header markers and
//! the session-start prefixes used when segmenting collapsed cells.

// =============================================================================
// Time Slots and Days
// =============================================================================

/// The six daily time slots, in canonical order
pub const TIME_SLOTS: [&str; 6] = [
    "08:00-09:30",
    "09:40-11:10",
    "11:20-12:50",
    "13:00-14:30",
    "14:40-16:10",
    "16:20-17:50",
];

/// Number of logical time slots per day
pub const SLOT_COUNT: usize = TIME_SLOTS.len();

/// Day label abbreviations, matched as case-insensitive prefixes in this order
pub const DAY_ABBREVIATIONS: &[(&str, &str)] = &[
    ("sat", "Saturday"),
    ("sun", "Sunday"),
    ("mon", "Monday"),
    ("tue", "Tuesday"),
    ("wed", "Wednesday"),
    ("thu", "Thursday"),
    ("fri", "Friday"),
];

/// Day cells shorter than this are candidates for joining with the next cell
pub const SHORT_DAY_FRAGMENT_LEN: usize = 3;

// =============================================================================
// Session Types
// =============================================================================

pub mod session_types {
    pub const COURSE: &str = "Course";
    pub const DIRECTED_WORK: &str = "Directed Work";
    pub const PRACTICAL_WORK: &str = "Practical Work";

    /// Code assumed when a session carries no explicit type token
    pub const DEFAULT_CODE: &str = "C";

    /// Known short codes and their canonical labels
    pub const CODE_TABLE: &[(&str, &str)] = &[
        ("DW", DIRECTED_WORK),
        ("PW", PRACTICAL_WORK),
        ("C", COURSE),
        ("SC", COURSE),
        ("F", COURSE),
        ("R2", COURSE),
        ("421T", COURSE),
        ("244T", COURSE),
        ("431T", COURSE),
    ];
}

// =============================================================================
// Cell Content Conventions
// =============================================================================

/// Course names that start a new session when a cell was collapsed onto one line
pub const SESSION_START_PREFIXES: &[&str] = &[
    "Algorithmique",
    "Génie logiciel",
    "Système d'Exploitation:",
    "Fondements de l'IA",
    "Administration et Architecture",
    "Techniques d'Optimisation",
    "Synchronisation course",
];

/// Recurring course label whose cells omit the group/course separator
pub const SPECIAL_COURSE_LABEL: &str = "Synchronisation course";

// =============================================================================
// Document Header
// =============================================================================

pub mod header {
    /// Institution reported for every document of this layout
    pub const DEFAULT_INSTITUTION: &str = "University of Science and Technology Houari Boumediene";

    /// Vice-rectorate phrase; whitespace between words may include line breaks
    pub const VICE_RECTORATE_PHRASE: &str = "Vice-rectorate in charge of the higher education of graduation, the continuing education et degrees";

    pub const PROGRAM_MARKER: &str = "Schedules of:";

    /// Labels that end the program text
    pub const PROGRAM_TERMINATORS: &[&str] = &["College year:", "Section:", "Semester:", "Date:"];

    pub const YEAR_LABEL: &str = "College year:";
    pub const SECTION_LABEL: &str = "Section:";
    pub const SEMESTER_LABEL: &str = "Semester:";
    pub const DATE_LABEL: &str = "Date:";

    /// chrono format of the header date
    pub const DATE_FORMAT: &str = "%d/%m/%Y";
}

// =============================================================================
// Fallback Service
// =============================================================================

/// Path of the extraction endpoint, relative to the configured base URL
pub const FALLBACK_EXTRACT_PATH: &str = "/api/schedule/extract-with-gemini";

/// Environment variable carrying the fallback base URL
pub const FALLBACK_URL_ENV: &str = "TIMETABLE_FALLBACK_URL";

// =============================================================================
// Logging
// =============================================================================

/// Log filter target for this crate
pub const LOG_TARGET: &str = "timetable_processor";

/// Default log level when neither --verbose nor --quiet is given
pub const DEFAULT_LOG_LEVEL: &str = "info";
