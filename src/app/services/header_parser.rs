//! Timetable header parsing and metadata extraction
//!
//! Each header field is found by its own pattern search over the whole text
//! blob, so the order and line layout of the header do not matter. A field
//! whose pattern does not match stays empty.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::app::models::HeaderInfo;
use crate::app::services::session_parser::segmentation::collapse_whitespace;
use crate::constants::header::{
    DATE_LABEL, DEFAULT_INSTITUTION, PROGRAM_MARKER, PROGRAM_TERMINATORS, SECTION_LABEL,
    SEMESTER_LABEL, VICE_RECTORATE_PHRASE, YEAR_LABEL,
};

/// The vice-rectorate phrase with any whitespace between its words
static VICE_RECTORATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let words = VICE_RECTORATE_PHRASE
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    Regex::new(&words).expect("valid vice-rectorate regex")
});

/// Program text between its marker and the first terminating label
static PROGRAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    let terminators = PROGRAM_TERMINATORS
        .iter()
        .map(|label| regex::escape(label))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?is){}\s*(.+?)\s*(?:{terminators}|\z)",
        regex::escape(PROGRAM_MARKER)
    ))
    .expect("valid program regex")
});

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| labelled(YEAR_LABEL, r"\d{4}/\d{4}"));

static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| labelled(SECTION_LABEL, r"[A-Z]"));

static SEMESTER_RE: LazyLock<Regex> = LazyLock::new(|| labelled(SEMESTER_LABEL, r"\d+"));

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| labelled(DATE_LABEL, r"\d{1,2}/\d{1,2}/\d{4}"));

/// `<label> <value>` with the value captured
fn labelled(label: &str, value: &str) -> Regex {
    Regex::new(&format!(r"{}\s*({value})", regex::escape(label)))
        .expect("valid header label regex")
}

/// Header parser for one timetable template
#[derive(Debug, Clone)]
pub struct HeaderParser {
    institution: String,
}

impl Default for HeaderParser {
    fn default() -> Self {
        Self::new(DEFAULT_INSTITUTION)
    }
}

impl HeaderParser {
    /// Create a parser reporting the given institution name
    pub fn new(institution: impl Into<String>) -> Self {
        Self {
            institution: institution.into(),
        }
    }

    /// Extract header metadata from the raw text of a document
    pub fn parse(&self, raw_text: &str) -> HeaderInfo {
        let header = HeaderInfo {
            university: self.institution.clone(),
            vice_rectorate: VICE_RECTORATE_RE
                .find(raw_text)
                .map(|m| collapse_whitespace(m.as_str()))
                .unwrap_or_default(),
            schedules_of: first_capture(&PROGRAM_RE, raw_text)
                .map(|program| clean_program(&program))
                .unwrap_or_default(),
            college_year: first_capture(&YEAR_RE, raw_text).unwrap_or_default(),
            section: first_capture(&SECTION_RE, raw_text).unwrap_or_default(),
            semester: first_capture(&SEMESTER_RE, raw_text).unwrap_or_default(),
            date: first_capture(&DATE_RE, raw_text).unwrap_or_default(),
        };

        debug!(
            "Parsed header: program={:?}, year={:?}, section={:?}, semester={:?}",
            header.schedules_of, header.college_year, header.section, header.semester
        );

        header
    }
}

/// Parse a header with the default institution name
pub fn parse_header(raw_text: &str) -> HeaderInfo {
    HeaderParser::default().parse(raw_text)
}

fn first_capture(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Collapse whitespace and drop a dangling `--` separator
fn clean_program(program: &str) -> String {
    collapse_whitespace(program)
        .trim_end_matches(|c: char| c == '-' || c.is_whitespace())
        .to_string()
}
