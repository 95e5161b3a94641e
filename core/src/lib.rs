//! Schema translation and statement assembly for `fastdb`.
//!
//! This crate turns the flag-oriented argument grammar of the `fastdb`
//! command line into SQL text. It has no database dependency; executing the
//! statements is the job of `fastdb-sqlite`.
//!
//! - [`translate_create_table`] / [`parse_table`]: the schema translator,
//!   reading `--int id --pk ...` field definitions into a [`TableDef`] and
//!   rendering a `CREATE TABLE` statement with inline column clauses and
//!   trailing `FOREIGN KEY` constraints.
//! - [`parse_fk_spec`]: normalization of the four accepted FK reference
//!   forms.
//! - [`Statement::build`]: per-verb skeleton checks and SQL assembly for
//!   `create`, `insert`, `update`, `delete`, `select` and the transaction
//!   verbs.
//!
//! # Example
//!
//! ```
//! use fastdb_core::{Statement, Verb};
//!
//! let args: Vec<String> = "--table users fields --int id --pk --ai --string name --notnull"
//!     .split(' ')
//!     .map(String::from)
//!     .collect();
//!
//! let stmt = Statement::build(Verb::Create, &args).unwrap();
//! assert_eq!(
//!     stmt.sql(),
//!     "CREATE TABLE users (\n  id INTEGER PRIMARY KEY AUTOINCREMENT,\n  name TEXT NOT NULL\n);"
//! );
//! ```

mod cursor;
mod error;
mod foreign_key;
mod statement;
mod translate;
mod types;

pub use cursor::TokenCursor;
pub use error::{BuildError, Result, TranslateError};
pub use foreign_key::parse_fk_spec;
pub use statement::{
    CREATE_USAGE, DELETE_USAGE, INSERT_USAGE, Join, SELECT_USAGE, SelectQuery, Statement,
    UPDATE_USAGE, Verb,
};
pub use translate::{parse_table, translate_create_table};
pub use types::{
    Affinity, ColumnDef, ColumnModifiers, FieldType, FkAction, FkTarget, Modifier, TableDef,
};
