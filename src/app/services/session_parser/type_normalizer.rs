//! Session type code normalization
//!
//! Maps the short type codes found in cells (`DW`, `PW`, `C`, ...) to their
//! canonical labels. Unknown codes pass through upper-cased so the
//! vocabulary stays open.

use crate::constants::session_types::CODE_TABLE;

/// Normalize an optional type code to its canonical label
pub fn normalize(code: Option<&str>) -> String {
    let Some(code) = code else {
        return String::new();
    };

    let normalized_code = code.trim().to_uppercase();
    if normalized_code.is_empty() {
        return String::new();
    }

    CODE_TABLE
        .iter()
        .find(|(known, _)| *known == normalized_code)
        .map(|(_, label)| label.to_string())
        .unwrap_or(normalized_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_any_case() {
        assert_eq!(normalize(Some("dw")), "Directed Work");
        assert_eq!(normalize(Some("DW")), "Directed Work");
        assert_eq!(normalize(Some(" pw ")), "Practical Work");
        assert_eq!(normalize(Some("431t")), "Course");
        assert_eq!(normalize(Some("R2")), "Course");
    }

    #[test]
    fn test_unknown_code_passes_through() {
        assert_eq!(normalize(Some("Z9")), "Z9");
        assert_eq!(normalize(Some("lab")), "LAB");
    }

    #[test]
    fn test_absent_or_blank_code() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
        assert_eq!(normalize(Some("   ")), "");
    }
}
