//! Command handlers: build the statement for a verb, run it, report.

use std::io::{self, Write};

use fastdb_core::{Statement, Verb};
use fastdb_sqlite::Database;
use tracing::info;

use crate::table::write_table;

/// Builds and executes the statement for `verb`, writing SQL echoes,
/// result tables and success lines to `out`.
///
/// `create` and `select` echo their SQL before running it; `select` renders
/// its rows through the table printer. Every other verb prints one line.
pub fn run_command(
    db: &Database,
    verb: Verb,
    args: &[String],
    out: &mut impl Write,
) -> Result<(), String> {
    let stmt = Statement::build(verb, args).map_err(|e| e.to_string())?;
    info!(%verb, "executing statement");

    match &stmt {
        Statement::Create { table, sql } => {
            writeln!(out, "SQL:\n{sql}").map_err(write_failed)?;
            db.exec(sql)
                .map_err(|e| format!("failed to create table '{table}': {e}"))?;
            writeln!(out, "Table '{table}' created.").map_err(write_failed)
        }
        Statement::Insert { table, sql } => {
            let rows = db
                .exec(sql)
                .map_err(|e| format!("failed to insert into '{table}': {e}"))?;
            writeln!(out, "{rows} row(s) inserted into '{table}'.").map_err(write_failed)
        }
        Statement::Update { table, sql } => {
            let rows = db
                .exec(sql)
                .map_err(|e| format!("failed to update '{table}': {e}"))?;
            writeln!(out, "{rows} row(s) updated in '{table}'.").map_err(write_failed)
        }
        Statement::Delete { table, sql } => {
            let rows = db
                .exec(sql)
                .map_err(|e| format!("failed to delete from '{table}': {e}"))?;
            writeln!(out, "{rows} row(s) deleted from '{table}'.").map_err(write_failed)
        }
        Statement::Select { sql } => {
            writeln!(out, "SQL:\n{sql}").map_err(write_failed)?;
            let result = db.query(sql).map_err(|e| format!("query failed: {e}"))?;
            write_table(out, &result).map_err(write_failed)
        }
        Statement::Transaction { verb, sql } => {
            db.exec(sql)
                .map_err(|e| format!("transaction '{verb}' failed: {e}"))?;
            writeln!(out, "Transaction '{verb}' executed.").map_err(write_failed)
        }
    }
}

fn write_failed(err: io::Error) -> String {
    format!("failed to write output: {err}")
}
