//! Fixed-width rendering of query results.

use std::io::{self, Write};

use fastdb_sqlite::QueryResult;

const CELL_WIDTH: usize = 20;
/// Width of one column in the rule under the header.
const COLUMN_SPAN: usize = CELL_WIDTH + 2;

/// Writes a header row, a `-` rule and every result row.
///
/// Cells are left-justified in 20 characters and followed by `" | "`.
/// Longer values are printed whole and push the rest of the row right.
pub fn write_table(out: &mut impl Write, result: &QueryResult) -> io::Result<()> {
    for name in &result.columns {
        write!(out, "{name:<width$} | ", width = CELL_WIDTH)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(COLUMN_SPAN * result.columns.len()))?;

    for row in &result.rows {
        for cell in row {
            let text = cell.as_deref().unwrap_or("NULL");
            write!(out, "{text:<width$} | ", width = CELL_WIDTH)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
