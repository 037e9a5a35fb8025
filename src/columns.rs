//! Column naming for the delay-cause table.

/// Positional names given to the transposed spreadsheet columns.
pub const FIXED_COLUMN_NAMES: &[&str] = &[
    "Number of Arriving Flights (millions)",
    "Air Carrier Delay",
    "Aircraft Arriving Late",
    "National Aviation System Delay",
    "Security Delay",
    "Extreme Weather",
    "Other Causes",
    "Column 8",
    "Column 9",
    "Column 10",
];

/// Columns removed before the table is stored. Absent names are ignored.
pub const DROPPED_COLUMNS: &[&str] = &[
    "Number of Arriving Flights (millions)",
    "Extreme Weather",
    "Other Causes",
];

/// Columns selected by the cleaning query, in output order.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Air Carrier Delay",
    "Aircraft Arriving Late",
    "National Aviation System Delay",
    "Security Delay",
];

/// Returns exactly `actual_count` names: the fixed names in order, padded with
/// `Extra Column <i>` when the table is wider, truncated when it is narrower.
pub fn resolve_column_names(fixed_names: &[&str], actual_count: usize) -> Vec<String> {
    let mut names: Vec<String> = fixed_names.iter().map(|n| n.to_string()).collect();
    names.extend((fixed_names.len()..actual_count).map(|i| format!("Extra Column {i}")));
    names.truncate(actual_count);
    names
}
