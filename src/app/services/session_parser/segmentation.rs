//! Sub-block segmentation of a reconciled cell
//!
//! A cell holding several sessions is either stacked (one session per line)
//! or collapsed onto a single line by the extractor. Collapsed cells are cut
//! right before every known session-start token, except a course prefix
//! directly following a group marker, which belongs to that marker's session.

use crate::constants::SESSION_START_PREFIXES;
use regex::Regex;
use std::sync::LazyLock;

/// Group marker (`G1`, `G2:204`, `G3 /`) or a known course-name prefix
static SESSION_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    let prefixes = SESSION_START_PREFIXES
        .iter()
        .map(|prefix| regex::escape(prefix))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)G\d+(?::\d+[A-Z]?)?(?:\s*/\s*)?|{prefixes}"))
        .expect("valid session start regex")
});

/// A session-start match that is a group marker rather than a course prefix
static GROUP_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^G\d").expect("valid group marker regex"));

/// Split cell text into candidate sub-blocks, one per session
pub fn split_sub_blocks(cell_text: &str) -> Vec<String> {
    if cell_text.contains('\n') {
        return cell_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
    }

    let normalized = collapse_whitespace(cell_text);
    if normalized.is_empty() {
        return Vec::new();
    }

    split_at_session_starts(&normalized)
}

/// Cut text immediately before every session-start token
///
/// A group marker alone is never a session, so a course prefix right after
/// one (`G2 / Génie logiciel ...`) does not start a new sub-block.
pub fn split_at_session_starts(text: &str) -> Vec<String> {
    let mut cuts: Vec<usize> = Vec::new();
    let mut marker_end: Option<usize> = None;

    for token in SESSION_START_RE.find_iter(text) {
        let is_marker = GROUP_MARKER_RE.is_match(token.as_str());
        let follows_marker =
            marker_end.is_some_and(|end| text[end..token.start()].trim().is_empty());

        if token.start() > 0 && (is_marker || !follows_marker) {
            cuts.push(token.start());
        }
        marker_end = is_marker.then_some(token.end());
    }

    if cuts.is_empty() {
        let trimmed = text.trim();
        return if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        };
    }

    cuts.push(text.len());

    let mut fragments = Vec::with_capacity(cuts.len());
    let mut start = 0;
    for end in cuts {
        let fragment = text[start..end].trim();
        if !fragment.is_empty() {
            fragments.push(fragment.to_string());
        }
        start = end;
    }

    fragments
}

/// Replace every whitespace run with a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
