//! Column drops and numeric coercion.

use tracing::{debug, info};

use crate::table::{ParseResult, ProjectedTable, ReshapedTable};

/// Removes every column named in `dropped` that is present, then coerces each
/// remaining cell with [`ParseResult::from`]. Never fails: absent columns are
/// skipped and unparsable cells become [`ParseResult::Missing`].
#[tracing::instrument(skip(table), fields(columns = table.columns.len(), rows = table.rows.len()))]
pub fn project(table: &ReshapedTable, dropped: &[&str]) -> ProjectedTable {
    for name in dropped {
        if table.column_position(name).is_none() {
            debug!(column = %name, "Column to drop not present");
        }
    }

    let kept: Vec<usize> = (0..table.columns.len())
        .filter(|&i| !dropped.contains(&table.columns[i].as_str()))
        .collect();

    let columns: Vec<String> = kept.iter().map(|&i| table.columns[i].clone()).collect();
    let rows: Vec<Vec<ParseResult>> = table
        .rows
        .iter()
        .map(|row| kept.iter().map(|&i| ParseResult::from(&row[i])).collect())
        .collect();

    let projected = ProjectedTable { columns, rows };
    info!(
        kept_columns = projected.columns.len(),
        missing_cells = projected.missing_cells(),
        "Columns projected"
    );
    projected
}
