//! Per-verb statement builders.
//!
//! Each verb checks its argument skeleton and assembles SQL by
//! concatenation. Caller-supplied fragments (values, assignments,
//! conditions, field lists) are pasted verbatim; this is the single site
//! where escaping would be added.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{BuildError, Result};
use crate::translate::translate_create_table;

pub const CREATE_USAGE: &str = "create --table <name> fields <definitions>";
pub const INSERT_USAGE: &str = "insert --table <name> values <values>";
pub const UPDATE_USAGE: &str = "update --table <name> set <assignments> where <condition>";
pub const DELETE_USAGE: &str = "delete --table <name> where <condition>";
pub const SELECT_USAGE: &str = "select <fields> from <table> [join <table> on <condition>]... \
[where <condition>] [group <columns>] [order <columns>] [limit <count>]";

/// Top-level verb of an invocation.
///
/// # Examples
///
/// ```
/// use fastdb_core::Verb;
///
/// let verb: Verb = "rollback".parse().unwrap();
/// assert_eq!(verb, Verb::Rollback);
/// assert!("drop".parse::<Verb>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Create,
    Insert,
    Update,
    Delete,
    Select,
    Begin,
    Commit,
    Rollback,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Create => "create",
            Verb::Insert => "insert",
            Verb::Update => "update",
            Verb::Delete => "delete",
            Verb::Select => "select",
            Verb::Begin => "begin",
            Verb::Commit => "commit",
            Verb::Rollback => "rollback",
        }
    }
}

impl FromStr for Verb {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self> {
        let verb = match s {
            "create" => Verb::Create,
            "insert" => Verb::Insert,
            "update" => Verb::Update,
            "delete" => Verb::Delete,
            "select" => Verb::Select,
            "begin" => Verb::Begin,
            "commit" => Verb::Commit,
            "rollback" => Verb::Rollback,
            other => return Err(BuildError::UnknownCommand(other.to_string())),
        };
        Ok(verb)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully assembled statement, ready to hand to the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Create { table: String, sql: String },
    Insert { table: String, sql: String },
    Update { table: String, sql: String },
    Delete { table: String, sql: String },
    Select { sql: String },
    Transaction { verb: Verb, sql: String },
}

impl Statement {
    /// Checks `args` against the skeleton of `verb` and assembles the SQL.
    ///
    /// # Errors
    ///
    /// [`BuildError::InvalidSyntax`] on a skeleton mismatch, or
    /// [`BuildError::Translate`] when `create` field definitions are bad.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastdb_core::{Statement, Verb};
    ///
    /// let args: Vec<String> = ["--table", "users", "where", "id=3"]
    ///     .iter()
    ///     .map(|a| a.to_string())
    ///     .collect();
    /// let stmt = Statement::build(Verb::Delete, &args).unwrap();
    /// assert_eq!(stmt.sql(), "DELETE FROM users WHERE id=3;");
    /// ```
    pub fn build(verb: Verb, args: &[String]) -> Result<Self> {
        let stmt = match verb {
            Verb::Create => build_create(args)?,
            Verb::Insert => build_insert(args)?,
            Verb::Update => build_update(args)?,
            Verb::Delete => build_delete(args)?,
            Verb::Select => Statement::Select {
                sql: SelectQuery::parse(args)?.to_sql(),
            },
            Verb::Begin | Verb::Commit | Verb::Rollback => build_transaction(verb, args)?,
        };
        debug!(%verb, sql = stmt.sql(), "assembled statement");
        Ok(stmt)
    }

    pub fn sql(&self) -> &str {
        match self {
            Statement::Create { sql, .. }
            | Statement::Insert { sql, .. }
            | Statement::Update { sql, .. }
            | Statement::Delete { sql, .. }
            | Statement::Select { sql }
            | Statement::Transaction { sql, .. } => sql,
        }
    }
}

fn syntax(usage: &'static str) -> BuildError {
    BuildError::InvalidSyntax { usage }
}

/// Matches `--table <name> <keyword> ...` and returns the table name.
fn table_prefix<'a>(args: &'a [String], keyword: &str, usage: &'static str) -> Result<&'a str> {
    match args {
        [flag, table, kw, ..] if flag == "--table" && kw == keyword => Ok(table.as_str()),
        _ => Err(syntax(usage)),
    }
}

fn build_create(args: &[String]) -> Result<Statement> {
    let table = table_prefix(args, "fields", CREATE_USAGE)?;
    let fields = &args[3..];
    if fields.is_empty() {
        return Err(syntax(CREATE_USAGE));
    }
    Ok(Statement::Create {
        table: table.to_string(),
        sql: translate_create_table(table, fields)?,
    })
}

fn build_insert(args: &[String]) -> Result<Statement> {
    let table = table_prefix(args, "values", INSERT_USAGE)?;
    let [values] = &args[3..] else {
        return Err(syntax(INSERT_USAGE));
    };
    Ok(Statement::Insert {
        table: table.to_string(),
        sql: format!("INSERT INTO {table} VALUES ({values});"),
    })
}

fn build_update(args: &[String]) -> Result<Statement> {
    let table = table_prefix(args, "set", UPDATE_USAGE)?;
    let [set, kw, condition] = &args[3..] else {
        return Err(syntax(UPDATE_USAGE));
    };
    if kw != "where" {
        return Err(syntax(UPDATE_USAGE));
    }
    Ok(Statement::Update {
        table: table.to_string(),
        sql: format!("UPDATE {table} SET {set} WHERE {condition};"),
    })
}

fn build_delete(args: &[String]) -> Result<Statement> {
    let table = table_prefix(args, "where", DELETE_USAGE)?;
    let [condition] = &args[3..] else {
        return Err(syntax(DELETE_USAGE));
    };
    Ok(Statement::Delete {
        table: table.to_string(),
        sql: format!("DELETE FROM {table} WHERE {condition};"),
    })
}

fn build_transaction(verb: Verb, args: &[String]) -> Result<Statement> {
    if !args.is_empty() {
        return Err(syntax(verb.as_str()));
    }
    Ok(Statement::Transaction {
        verb,
        sql: format!("{verb};"),
    })
}

/// A `JOIN <table> ON <condition>` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub table: String,
    pub on: String,
}

/// Parsed `select` arguments.
///
/// Clause keywords after `from <table>` may come in any order; `join` may
/// repeat, the others appear at most once. Emission order is fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectQuery {
    pub fields: String,
    pub table: String,
    pub joins: Vec<Join>,
    pub filter: Option<String>,
    pub group_by: Option<String>,
    pub order_by: Option<String>,
    pub limit: Option<String>,
}

impl SelectQuery {
    /// Parses `F from T [join J on C]* [where W] [group G] [order O] [limit N]`.
    ///
    /// Every fragment is a single argument; multi-word conditions must be
    /// quoted by the caller.
    pub fn parse(args: &[String]) -> Result<Self> {
        let [fields, from, table, rest @ ..] = args else {
            return Err(syntax(SELECT_USAGE));
        };
        if from != "from" {
            return Err(syntax(SELECT_USAGE));
        }

        let mut query = SelectQuery {
            fields: fields.clone(),
            table: table.clone(),
            ..Default::default()
        };

        let mut rest = rest;
        while !rest.is_empty() {
            rest = match rest {
                [kw, joined, on, condition, tail @ ..] if kw == "join" && on == "on" => {
                    query.joins.push(Join {
                        table: joined.clone(),
                        on: condition.clone(),
                    });
                    tail
                }
                [kw, value, tail @ ..] => {
                    let slot = match kw.as_str() {
                        "where" => &mut query.filter,
                        "group" => &mut query.group_by,
                        "order" => &mut query.order_by,
                        "limit" => &mut query.limit,
                        _ => return Err(syntax(SELECT_USAGE)),
                    };
                    if slot.replace(value.clone()).is_some() {
                        return Err(syntax(SELECT_USAGE));
                    }
                    tail
                }
                _ => return Err(syntax(SELECT_USAGE)),
            };
        }

        Ok(query)
    }

    pub fn to_sql(&self) -> String {
        let mut sql = format!("SELECT {} FROM {}", self.fields, self.table);
        for join in &self.joins {
            sql.push_str(&format!(" JOIN {} ON {}", join.table, join.on));
        }
        if let Some(filter) = &self.filter {
            sql.push_str(&format!(" WHERE {filter}"));
        }
        if let Some(group_by) = &self.group_by {
            sql.push_str(&format!(" GROUP BY {group_by}"));
        }
        if let Some(order_by) = &self.order_by {
            sql.push_str(&format!(" ORDER BY {order_by}"));
        }
        if let Some(limit) = &self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        sql.push(';');
        sql
    }
}
