//! SQLite staging table and the completeness query.
//!
//! The projected table is written to a file-backed database, replacing any
//! previous table of the same name, and the cleaned rows are read back with a
//! fixed `IS NOT NULL` filter over [`REQUIRED_COLUMNS`].

use std::path::Path;

use rusqlite::{Connection, params_from_iter};
use tracing::{debug, info};

use crate::columns::REQUIRED_COLUMNS;
use crate::error::{PipelineError, Result};
use crate::record::CleanedRecord;
use crate::table::ProjectedTable;

/// Stores `table` as `table_name` in the database at `db_path` and returns the
/// rows where every required column is non-null, in insertion order.
///
/// The connection is opened and closed within this call.
///
/// # Errors
///
/// [`PipelineError::Format`] if a required column is absent from `table`,
/// [`PipelineError::Storage`] for any SQLite failure.
#[tracing::instrument(skip(table), fields(db = %db_path.display(), rows = table.rows.len()))]
pub fn persist_and_filter(
    db_path: &Path,
    table_name: &str,
    table: &ProjectedTable,
) -> Result<Vec<CleanedRecord>> {
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !table.has_column(c)) {
        return Err(PipelineError::format(format!(
            "required column '{missing}' not found after reshaping"
        )));
    }

    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PipelineError::io(parent, e))?;
    }

    let mut conn = Connection::open(db_path)?;
    replace_table(&mut conn, table_name, table)?;
    let records = select_complete(&conn, table_name)?;
    conn.close().map_err(|(_, e)| PipelineError::Storage(e))?;

    info!(
        stored = table.rows.len(),
        kept = records.len(),
        "Incomplete rows filtered"
    );
    Ok(records)
}

fn replace_table(conn: &mut Connection, table_name: &str, table: &ProjectedTable) -> Result<()> {
    let name = quote_ident(table_name);
    let column_defs: Vec<String> = table
        .columns
        .iter()
        .map(|c| format!("{} REAL", quote_ident(c)))
        .collect();
    let placeholders = vec!["?"; table.columns.len()].join(", ");

    let tx = conn.transaction()?;
    tx.execute_batch(&format!(
        "DROP TABLE IF EXISTS {name};\nCREATE TABLE {name} ({});",
        column_defs.join(", ")
    ))?;
    {
        let mut stmt = tx.prepare(&format!("INSERT INTO {name} VALUES ({placeholders})"))?;
        for row in &table.rows {
            stmt.execute(params_from_iter(row.iter()))?;
        }
    }
    tx.commit()?;

    debug!(table = table_name, columns = table.columns.len(), "Table replaced");
    Ok(())
}

fn select_complete(conn: &Connection, table_name: &str) -> Result<Vec<CleanedRecord>> {
    let selected: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| quote_ident(c)).collect();
    let predicate: Vec<String> = selected.iter().map(|c| format!("{c} IS NOT NULL")).collect();
    let query = format!(
        "SELECT {} FROM {} WHERE {} ORDER BY rowid",
        selected.join(", "),
        quote_ident(table_name),
        predicate.join(" AND ")
    );
    debug!(%query, "Running cleaning query");

    let mut stmt = conn.prepare(&query)?;
    let records = stmt
        .query_map([], |row| {
            Ok(CleanedRecord {
                air_carrier_delay: row.get(0)?,
                aircraft_arriving_late: row.get(1)?,
                national_aviation_system_delay: row.get(2)?,
                security_delay: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(records)
}

/// Double-quotes an SQL identifier.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
