//! Day label resolution for table rows
//!
//! The extractor sometimes splits a day label over the first two grid
//! columns (`"Sa"` + `"t"`); short fragments are joined before matching the
//! label against the abbreviation table.

use crate::app::models::Day;
use crate::constants::{DAY_ABBREVIATIONS, SHORT_DAY_FRAGMENT_LEN};

/// Resolve a day cell, optionally joined with the adjacent cell
pub fn resolve(cell_text: &str, next_cell_text: Option<&str>) -> Option<Day> {
    let mut label = cell_text.trim().to_string();

    if let Some(next) = next_cell_text.map(str::trim) {
        if is_fragment(&label) && is_fragment(next) {
            label.push_str(next);
        }
    }

    let label = label.to_lowercase();
    DAY_ABBREVIATIONS
        .iter()
        .find(|(abbreviation, _)| label.starts_with(abbreviation))
        .and_then(|(_, name)| Day::from_name(name))
}

/// Resolve the day of a grid row from its first one or two cells
pub fn resolve_row(row: &[Option<String>]) -> Option<Day> {
    let first = row.first().and_then(|cell| cell.as_deref()).unwrap_or("");
    let second = row.get(1).and_then(|cell| cell.as_deref());
    resolve(first, second)
}

fn is_fragment(text: &str) -> bool {
    text.chars().count() < SHORT_DAY_FRAGMENT_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_label_joined() {
        assert_eq!(resolve("Sa", Some("t")), Some(Day::Saturday));
        assert_eq!(resolve(" We ", Some(" d")), Some(Day::Wednesday));
    }

    #[test]
    fn test_full_and_abbreviated_labels() {
        assert_eq!(resolve("Monday", None), Some(Day::Monday));
        assert_eq!(resolve("THU", None), Some(Day::Thursday));
        assert_eq!(resolve("sunday", Some("G1 / Algorithms -- C")), Some(Day::Sunday));
    }

    #[test]
    fn test_long_neighbour_not_joined() {
        assert_eq!(resolve("Fr", Some("Algorithms")), None);
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(resolve("Xyz", None), None);
        assert_eq!(resolve("", None), None);
        assert_eq!(resolve("Day", Some("")), None);
    }

    #[test]
    fn test_resolve_row() {
        let row = vec![Some("Tu".to_string()), Some("e".to_string())];
        assert_eq!(resolve_row(&row), Some(Day::Tuesday));

        let row = vec![None, Some("Mon".to_string())];
        assert_eq!(resolve_row(&row), None);

        assert_eq!(resolve_row(&[]), None);
    }
}
