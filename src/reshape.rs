//! Transposes the raw sheet so each period becomes a row.

use calamine::Data;
use tracing::{debug, info};

use crate::columns::{FIXED_COLUMN_NAMES, resolve_column_names};
use crate::error::{PipelineError, Result};
use crate::table::{RawTable, ReshapedTable};

/// Uses the first raw column as row labels, transposes, and renames the
/// resulting columns positionally from [`FIXED_COLUMN_NAMES`].
#[tracing::instrument(skip(raw), fields(raw_rows = raw.rows.len(), raw_columns = raw.header.len()))]
pub fn reshape(raw: &RawTable) -> Result<ReshapedTable> {
    if raw.header.is_empty() {
        return Err(PipelineError::format("sheet has no label column"));
    }

    let labels: Vec<String> = raw.rows.iter().map(|row| label_text(&row[0])).collect();
    let columns = resolve_column_names(FIXED_COLUMN_NAMES, labels.len());

    for (label, name) in labels.iter().zip(&columns) {
        debug!(source = %label, column = %name, "Column assigned");
    }

    let index: Vec<String> = raw.header[1..].to_vec();
    let rows: Vec<Vec<Data>> = (1..raw.header.len())
        .map(|col| raw.rows.iter().map(|row| row[col].clone()).collect())
        .collect();

    info!(columns = columns.len(), rows = rows.len(), "Sheet transposed");

    Ok(ReshapedTable {
        index,
        columns,
        rows,
    })
}

fn label_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
