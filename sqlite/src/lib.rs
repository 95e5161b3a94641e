//! SQLite driver adapter for `fastdb`.
//!
//! A thin layer over [`rusqlite`] exposing exactly what the command handlers
//! use:
//!
//! - [`Database::open`]: acquire the handle (foreign keys enforced)
//! - [`Database::exec`]: run a statement for its side effects
//! - [`Database::query`]: run a statement and collect column names plus
//!   rows of text cells ([`QueryResult`])
//! - [`Database::close`]: release the handle, reporting close failures
//!
//! # Quick start
//!
//! ```no_run
//! use fastdb_sqlite::Database;
//!
//! let db = Database::open("app.db").unwrap();
//! db.exec("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT);").unwrap();
//! let changed = db.exec("INSERT INTO users VALUES (1, 'ana');").unwrap();
//! assert_eq!(changed, 1);
//!
//! let result = db.query("SELECT * FROM users;").unwrap();
//! for row in &result.rows {
//!     println!("{row:?}");
//! }
//! ```

mod driver;
mod error;

pub use driver::{Database, QueryResult};
pub use error::{DriverError, Result};
