//! Normalization of `--fk` operands.
//!
//! A reference may be written as `table(column)`, `table.column`,
//! `table,column` or `table column`, optionally wrapped in one pair of outer
//! parentheses. All forms naming the same pair normalize to the same
//! [`FkTarget`].
//!
//! Separators are searched in a fixed order: `.`, then `(`, then `,`, then
//! a space. The first one found splits the operand, so column names
//! containing any of these characters cannot be referenced.

use crate::error::TranslateError;
use crate::types::FkTarget;

/// Parses an FK spec into its `(table, column)` pair.
///
/// # Errors
///
/// Returns [`TranslateError::InvalidFkFormat`] when no separator is found,
/// when either side is empty, or when a `(` form lacks its closing `)`.
///
/// # Examples
///
/// ```
/// use fastdb_core::parse_fk_spec;
///
/// let a = parse_fk_spec("clients(id)").unwrap();
/// let b = parse_fk_spec("clients.id").unwrap();
/// let c = parse_fk_spec("(clients,id)").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(b, c);
/// assert_eq!(a.to_string(), "clients(id)");
///
/// assert!(parse_fk_spec("clients").is_err());
/// ```
pub fn parse_fk_spec(spec: &str) -> Result<FkTarget, TranslateError> {
    let invalid = || TranslateError::InvalidFkFormat(spec.to_string());

    let inner = spec
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(spec);

    let (table, column) = if let Some((table, column)) = inner.split_once('.') {
        (table, column)
    } else if let Some((table, rest)) = inner.split_once('(') {
        (table, rest.strip_suffix(')').ok_or_else(invalid)?)
    } else if let Some(pair) = inner.split_once(',') {
        pair
    } else if let Some(pair) = inner.split_once(' ') {
        pair
    } else {
        return Err(invalid());
    };

    let (table, column) = (table.trim(), column.trim());
    if table.is_empty() || column.is_empty() {
        return Err(invalid());
    }

    Ok(FkTarget {
        table: table.to_string(),
        column: column.to_string(),
    })
}
