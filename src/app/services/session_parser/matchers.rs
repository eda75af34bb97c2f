//! Session authoring conventions as matcher strategies
//!
//! Each matcher recognizes one way the timetable authors wrote a session
//! and turns a matching sub-block into a [`Session`]. The parser tries them
//! in [`default_cascade`] order and keeps the first match, so stricter
//! conventions must come before looser ones.

use super::type_normalizer::normalize;
use crate::app::models::Session;
use crate::constants::SPECIAL_COURSE_LABEL;
use crate::constants::session_types::{CODE_TABLE, DEFAULT_CODE};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Characters allowed in course text
const COURSE_CHARS: &str = r#"[A-Za-zÀ-ÿ’'":,\-/\s]"#;

/// Characters allowed in professor names
const PROFESSOR_CHARS: &str = r"[A-Za-zÀ-ÿ\s-]";

/// `G1:204 / Algorithms -- C, Smith`
static GROUPED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(G\d+)(?::(\d+[A-Z]?))?\s*/\s*({COURSE_CHARS}+?)\s*--\s*([A-Za-z]+)(?:,?\s*({PROFESSOR_CHARS}+))?"
    ))
    .expect("valid grouped session regex")
});

/// `Algorithms course 204 Smith`
static COURSE_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^({COURSE_CHARS}+?)\s*\bcourse\b\s*([A-Za-z0-9.]+)?\s*({PROFESSOR_CHARS}+)?"
    ))
    .expect("valid course keyword regex")
});

/// `Operating Systems: Synchronisation -- DW, Smith`
static QUALIFIED_COURSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^({COURSE_CHARS}+?):\s*({COURSE_CHARS}+?)\s*--\s*([A-Za-z]+)(?:,?\s*({PROFESSOR_CHARS}+))?"
    ))
    .expect("valid qualified course regex")
});

/// `Synchronisation course DW Smith`
static SPECIAL_COURSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^({})\s*([A-Za-z]+)\s*({PROFESSOR_CHARS}+)?",
        regex::escape(SPECIAL_COURSE_LABEL)
    ))
    .expect("valid special course regex")
});

/// `Algorithms 204 Smith` or `Algorithms DW Smith`
static TRAILING_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^({COURSE_CHARS}+?)\s+([A-Za-z0-9.]+)\s+({PROFESSOR_CHARS}+)$"
    ))
    .expect("valid trailing token regex")
});

static COURSE_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{COURSE_CHARS}+$")).expect("valid course text regex"));

static PROFESSOR_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{PROFESSOR_CHARS}+$")).expect("valid professor text regex")
});

/// A purely numeric token with an optional capital letter is a room
static ROOM_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[A-Z]?$").expect("valid room token regex"));

/// One session authoring convention
pub trait SessionMatcher: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Parse the sub-block when it follows this convention
    fn try_match(&self, text: &str) -> Option<Session>;
}

/// The five conventions, strictest first
pub fn default_cascade() -> Vec<Box<dyn SessionMatcher>> {
    vec![
        Box::new(GroupedSessionMatcher),
        Box::new(CourseKeywordMatcher),
        Box::new(QualifiedCourseMatcher),
        Box::new(SpecialCourseMatcher),
        Box::new(TrailingTokenMatcher),
    ]
}

/// `G<group>[:<room>] / <course> -- <type>[, <professor>]`
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedSessionMatcher;

impl SessionMatcher for GroupedSessionMatcher {
    fn name(&self) -> &'static str {
        "grouped"
    }

    fn try_match(&self, text: &str) -> Option<Session> {
        let caps = GROUPED_RE.captures(text)?;
        Some(Session {
            group: capture(&caps, 1),
            room: capture(&caps, 2),
            course: capture(&caps, 3).unwrap_or_default(),
            session_type: normalize(caps.get(4).map(|m| m.as_str())),
            professor: capture(&caps, 5),
        })
    }
}

/// `<course> course [<room or type>] [<professor>]`
#[derive(Debug, Clone, Copy, Default)]
pub struct CourseKeywordMatcher;

impl SessionMatcher for CourseKeywordMatcher {
    fn name(&self) -> &'static str {
        "course-keyword"
    }

    fn try_match(&self, text: &str) -> Option<Session> {
        let caps = COURSE_KEYWORD_RE.captures(text)?;
        let mut session = Session {
            course: capture(&caps, 1).unwrap_or_default(),
            professor: capture(&caps, 3),
            ..Default::default()
        };

        if let Some(token) = capture(&caps, 2) {
            if is_room_token(&token) {
                session.room = Some(token);
            } else {
                session.session_type = normalize(Some(&token));
            }
        }

        if session.session_type.is_empty() {
            session.session_type = normalize(Some(DEFAULT_CODE));
        }

        Some(session)
    }
}

/// `<course>: <sub-label> -- <type>[, <professor>]`
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifiedCourseMatcher;

impl SessionMatcher for QualifiedCourseMatcher {
    fn name(&self) -> &'static str {
        "qualified-course"
    }

    fn try_match(&self, text: &str) -> Option<Session> {
        let caps = QUALIFIED_COURSE_RE.captures(text)?;
        let course = capture(&caps, 1).unwrap_or_default();
        let label = capture(&caps, 2).unwrap_or_default();

        Some(Session {
            course: format!("{course}: {label}"),
            session_type: normalize(caps.get(3).map(|m| m.as_str())),
            professor: capture(&caps, 4),
            ..Default::default()
        })
    }
}

/// The recurring special course, written `<label> <type> [<professor>]`
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecialCourseMatcher;

impl SessionMatcher for SpecialCourseMatcher {
    fn name(&self) -> &'static str {
        "special-course"
    }

    fn try_match(&self, text: &str) -> Option<Session> {
        let caps = SPECIAL_COURSE_RE.captures(text)?;
        Some(Session {
            course: capture(&caps, 1).unwrap_or_default(),
            session_type: normalize(caps.get(2).map(|m| m.as_str())),
            professor: capture(&caps, 3),
            ..Default::default()
        })
    }
}

/// Catch-all `<course> <room or type> <professor>`
///
/// The middle token is the leftmost word that is a room or a known type
/// code, so multi-word courses stay whole. Without such a word it is the
/// first word after which only name characters remain.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingTokenMatcher;

impl SessionMatcher for TrailingTokenMatcher {
    fn name(&self) -> &'static str {
        "trailing-token"
    }

    fn try_match(&self, text: &str) -> Option<Session> {
        let caps = TRAILING_TOKEN_RE.captures(text)?;
        let (course, token, professor) = split_at_marker_token(text).unwrap_or_else(|| {
            (
                capture(&caps, 1).unwrap_or_default(),
                capture(&caps, 2).unwrap_or_default(),
                capture(&caps, 3),
            )
        });

        let mut session = Session {
            course,
            professor,
            ..Default::default()
        };

        if is_room_token(&token) {
            session.room = Some(token);
            session.session_type = normalize(Some(DEFAULT_CODE));
        } else {
            session.session_type = normalize(Some(&token));
        }

        Some(session)
    }
}

/// Split `<course> <token> <professor>` at the leftmost room or type code word
fn split_at_marker_token(text: &str) -> Option<(String, String, Option<String>)> {
    let words: Vec<&str> = text.split_whitespace().collect();

    (1..words.len().saturating_sub(1)).find_map(|index| {
        let token = words[index];
        if !(is_room_token(token) || is_type_code(token)) {
            return None;
        }

        let course = words[..index].join(" ");
        let professor = words[index + 1..].join(" ");
        (COURSE_TEXT_RE.is_match(&course) && PROFESSOR_TEXT_RE.is_match(&professor))
            .then(|| (course, token.to_string(), Some(professor)))
    })
}

fn is_type_code(token: &str) -> bool {
    CODE_TABLE.iter().any(|(code, _)| *code == token)
}

fn is_room_token(token: &str) -> bool {
    ROOM_TOKEN_RE.is_match(token)
}

/// Trimmed capture group, absent when missing or blank
fn capture(caps: &Captures<'_>, index: usize) -> Option<String> {
    caps.get(index)
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
