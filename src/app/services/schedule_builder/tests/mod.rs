//! Test utilities for the schedule builder
//!
//! Grid fixtures laid out like the default column layout: day label in
//! columns 0-1, slots in 2, 4, 6+7, 8+9, 11 and 12+13.

mod stats_tests;

/// Grid header row
pub fn header_row() -> Vec<Option<String>> {
    let mut row = vec![Some("Day".to_string()), None];
    row.extend(crate::constants::TIME_SLOTS.iter().map(|s| Some(s.to_string())));
    row
}

/// A 14-column row with a day label and the given slot cells
pub fn day_row(day: &str, slots: [&str; 6]) -> Vec<Option<String>> {
    let mut row: Vec<Option<String>> = vec![None; 14];
    row[0] = Some(day.to_string());
    row[2] = Some(slots[0].to_string());
    row[4] = Some(slots[1].to_string());
    row[6] = Some(slots[2].to_string());
    row[8] = Some(slots[3].to_string());
    row[11] = Some(slots[4].to_string());
    row[12] = Some(slots[5].to_string());
    row
}

/// Grid with header, two day rows and a spacer row
pub fn create_test_grid() -> Vec<Vec<Option<String>>> {
    vec![
        header_row(),
        day_row(
            "Saturday",
            [
                "G1:204 / Algorithms -- C, Smith",
                "",
                "G1 / Networks -- PW, Benali\nG2 / Networks -- PW, Haddad",
                "",
                "",
                "",
            ],
        ),
        vec![None, None, Some("Lunch".to_string())],
        day_row(
            "Mon",
            ["", "", "", "Compilation course DW Haddad", "", "Algorithms course 101 Smith"],
        ),
    ]
}
