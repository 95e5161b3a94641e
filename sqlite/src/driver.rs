//! Database handle used by every `fastdb` command.
//!
//! [`Database`] wraps a single [`rusqlite::Connection`] and exposes the three
//! operations the command handlers need: open, execute for side effects,
//! and query with column metadata. Result cells are surfaced as text so the
//! printer never has to know about storage classes.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use rusqlite::types::ValueRef;
use tracing::{debug, warn};

use crate::error::{DriverError, Result};

/// Column names plus every row of a query, each cell rendered as text.
///
/// `None` marks a SQL `NULL`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// An open database file.
///
/// The handle is released when the value is dropped, so early returns and
/// error paths close it too. [`close`](Self::close) does the same explicitly
/// and reports a failing close.
///
/// # Examples
///
/// ```no_run
/// use fastdb_sqlite::Database;
///
/// let db = Database::open("app.db").unwrap();
/// db.exec("CREATE TABLE t (id INTEGER);").unwrap();
/// let result = db.query("SELECT id FROM t;").unwrap();
/// assert_eq!(result.columns, vec!["id"]);
/// db.close().unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    conn: Connection,
    path: PathBuf,
}

impl Database {
    /// Opens (or creates) the database file at `path`.
    ///
    /// Foreign key enforcement is switched on for the connection so that
    /// `ON DELETE` / `ON UPDATE` actions take effect.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Open`] carrying the engine's diagnostic.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let open_err = |source: rusqlite::Error| DriverError::Open {
            path: path.clone(),
            source,
        };

        let conn = Connection::open(&path).map_err(open_err)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(open_err)?;

        debug!(path = %path.display(), "opened database");
        Ok(Self { conn, path })
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    /// Executes `sql` for its side effects.
    ///
    /// Returns the number of rows changed by the statement. The count is
    /// only meaningful for `INSERT`, `UPDATE` and `DELETE`.
    pub fn exec(&self, sql: &str) -> Result<u64> {
        debug!(sql, "exec");
        self.conn.execute_batch(sql)?;
        Ok(self.conn.changes())
    }

    /// Prepares `sql`, steps through every row and finalizes the statement.
    pub fn query(&self, sql: &str) -> Result<QueryResult> {
        debug!(sql, "query");
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = Vec::new();
        let mut cursor = stmt.query([])?;
        while let Some(row) = cursor.next()? {
            let cells = (0..columns.len())
                .map(|idx| row.get_ref(idx).map(cell_text))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            rows.push(cells);
        }

        debug!(columns = columns.len(), rows = rows.len(), "query finished");
        Ok(QueryResult { columns, rows })
    }

    /// Closes the handle, surfacing any error the engine reports.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn.close().map_err(|(_conn, err)| {
            warn!(path = %path.display(), error = %err, "failed to close database");
            DriverError::Database(err)
        })?;
        debug!(path = %path.display(), "closed database");
        Ok(())
    }
}

/// Renders a cell the way the engine's text conversion would.
fn cell_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(format!("{f:?}")),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
