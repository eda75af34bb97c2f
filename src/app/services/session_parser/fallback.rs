//! Degraded session synthesis for cells no convention recognizes
//!
//! Guarantees that non-empty cell content always yields a session: a
//! trailing run of capitalized words becomes the professor and whatever
//! remains, minus type markers and the word "course", becomes the course.

use super::segmentation::collapse_whitespace;
use super::type_normalizer::normalize;
use crate::app::models::Session;
use crate::constants::session_types::DEFAULT_CODE;
use regex::Regex;
use std::sync::LazyLock;

/// Capitalized name running to the end of the text
static TRAILING_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z][a-zÀ-ÿ\s-]+)$").expect("valid trailing name regex"));

/// Inline `--DW` style type markers
static TYPE_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*--\s*(?:DW|PW|SC|R2|C|F|T)\b\s*").expect("valid type marker regex")
});

static COURSE_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcourse\b").expect("valid course word regex"));

/// Build the best-effort session for a whole cell
pub fn fallback_session(cell_text: &str) -> Session {
    let text = collapse_whitespace(cell_text);

    let professor = TRAILING_NAME_RE
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty());

    let mut candidate = text.clone();
    if let Some(name) = &professor {
        candidate = candidate.replace(name.as_str(), "");
    }
    let candidate = TYPE_MARKER_RE.replace_all(&candidate, " ");
    let candidate = COURSE_WORD_RE.replace_all(&candidate, " ");
    let course = collapse_whitespace(&candidate)
        .trim_end_matches(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .to_string();

    Session {
        group: None,
        room: None,
        course: if course.is_empty() { text } else { course },
        session_type: normalize(Some(DEFAULT_CODE)),
        professor,
    }
}
