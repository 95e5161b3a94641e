//! Schema translator: field-definition tokens to `CREATE TABLE`.
//!
//! The token grammar, read left to right in a single pass:
//!
//! ```text
//! columns   := column+
//! column    := TYPE NAME modifier*
//! TYPE      := --int | --string | --float | --bool | --date | --blob | --text
//! modifier  := --pk | --ai | --notnull | --unique
//!            | --default LITERAL
//!            | --fk FK_SPEC
//!            | --ondelete ACTION
//!            | --onupdate ACTION
//! ```
//!
//! A column's modifiers end at the end of input or at the next token that is
//! not a modifier flag. That token must be a type flag opening the next
//! column; anything else is reported as an invalid field type.

use tracing::debug;

use crate::cursor::TokenCursor;
use crate::error::TranslateError;
use crate::foreign_key::parse_fk_spec;
use crate::types::{ColumnDef, FieldType, FkAction, Modifier, TableDef};

/// Reads field-definition tokens into a [`TableDef`].
///
/// # Errors
///
/// Any [`TranslateError`]; the first failure aborts the translation.
///
/// # Examples
///
/// ```
/// use fastdb_core::parse_table;
///
/// let tokens: Vec<String> = "--int id --pk --ai --string name --notnull"
///     .split(' ')
///     .map(String::from)
///     .collect();
/// let table = parse_table("users", &tokens).unwrap();
/// assert_eq!(table.columns.len(), 2);
/// assert!(table.columns[0].modifiers.primary_key);
/// assert!(table.columns[1].modifiers.not_null);
/// ```
pub fn parse_table(name: &str, tokens: &[String]) -> Result<TableDef, TranslateError> {
    let mut cursor = TokenCursor::new(tokens);
    let mut columns = Vec::new();

    while !cursor.is_at_end() {
        columns.push(parse_column(&mut cursor)?);
    }

    if columns.is_empty() {
        return Err(TranslateError::NoColumns);
    }

    Ok(TableDef {
        name: name.to_string(),
        columns,
    })
}

/// Translates field-definition tokens straight to a `CREATE TABLE`
/// statement.
///
/// # Examples
///
/// ```
/// use fastdb_core::translate_create_table;
///
/// let raw = ["--int", "customer_id", "--fk", "customers(id)", "--ondelete", "cascade"];
/// let tokens: Vec<String> = raw
///     .iter()
///     .map(|t| t.to_string())
///     .collect();
/// let sql = translate_create_table("orders", &tokens).unwrap();
/// assert!(sql.contains("FOREIGN KEY(customer_id) REFERENCES customers(id) ON DELETE cascade"));
/// assert!(sql.ends_with(");"));
/// ```
pub fn translate_create_table(name: &str, tokens: &[String]) -> Result<String, TranslateError> {
    let table = parse_table(name, tokens)?;
    let sql = table.to_sql();
    debug!(table = name, columns = table.columns.len(), "translated table definition");
    Ok(sql)
}

fn parse_column(cursor: &mut TokenCursor<'_>) -> Result<ColumnDef, TranslateError> {
    let type_flag = cursor.advance().unwrap_or_default();
    let field_type = FieldType::from_flag(type_flag)
        .ok_or_else(|| TranslateError::InvalidFieldType(type_flag.to_string()))?;

    let name = cursor
        .advance_if(is_field_name)
        .ok_or_else(|| TranslateError::MissingFieldName(type_flag.to_string()))?;

    let mut column = ColumnDef::new(name, field_type);
    while let Some(flag) = cursor.peek() {
        let Some(modifier) = Modifier::from_flag(flag) else {
            break;
        };
        cursor.advance();
        apply_modifier(&mut column, modifier, flag, cursor)?;
    }

    debug!(column = %column.name, sql = %column.to_sql(), "parsed column");
    Ok(column)
}

fn apply_modifier(
    column: &mut ColumnDef,
    modifier: Modifier,
    flag: &str,
    cursor: &mut TokenCursor<'_>,
) -> Result<(), TranslateError> {
    let m = &mut column.modifiers;
    match modifier {
        Modifier::PrimaryKey => m.primary_key = true,
        Modifier::AutoIncrement => m.autoincrement = true,
        Modifier::NotNull => m.not_null = true,
        Modifier::Unique => m.unique = true,
        Modifier::Default => m.default = Some(operand(cursor, flag)?.to_string()),
        Modifier::ForeignKey => m.references = Some(parse_fk_spec(operand(cursor, flag)?)?),
        Modifier::OnDelete => m.on_delete = Some(action(operand(cursor, flag)?)?),
        Modifier::OnUpdate => m.on_update = Some(action(operand(cursor, flag)?)?),
    }
    Ok(())
}

fn operand<'a>(cursor: &mut TokenCursor<'a>, flag: &str) -> Result<&'a str, TranslateError> {
    cursor
        .advance()
        .ok_or_else(|| TranslateError::MissingOperand(flag.to_string()))
}

fn action(token: &str) -> Result<FkAction, TranslateError> {
    FkAction::parse(token).ok_or_else(|| TranslateError::InvalidFkAction(token.to_string()))
}

/// A field name must be present and must not be one of the grammar's own
/// flags, which would mean the name was left out.
fn is_field_name(token: &str) -> bool {
    !token.is_empty()
        && FieldType::from_flag(token).is_none()
        && Modifier::from_flag(token).is_none()
}
