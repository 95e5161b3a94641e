//! Error types for schema translation and statement assembly.
//!
//! [`TranslateError`] covers failures while reading the field-definition
//! token stream of `create`. [`BuildError`] is what every statement builder
//! returns: either the verb's argument skeleton did not match, or the
//! schema translator rejected the field definitions.

use thiserror::Error;

/// Failures of the schema translator.
///
/// Any of these aborts the whole translation; no partial SQL is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// A column position holds a token that is not a type flag.
    #[error("invalid field type: {0}")]
    InvalidFieldType(String),

    /// A type flag is not followed by a usable field name.
    #[error("missing field name after {0}")]
    MissingFieldName(String),

    /// An operand-taking modifier is the last token.
    #[error("missing operand after {0}")]
    MissingOperand(String),

    /// An `--ondelete` / `--onupdate` operand outside the action set.
    #[error("invalid FK action: {0} (expected cascade, restrict, setnull, setdefault or noaction)")]
    InvalidFkAction(String),

    /// An `--fk` operand matching none of the accepted reference forms.
    #[error("invalid FK format: {0} (use table(column), table.column, table,column or 'table column')")]
    InvalidFkFormat(String),

    /// The field-definition stream is empty.
    #[error("no field definitions given")]
    NoColumns,
}

/// Failures of the per-verb statement builders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The argument list does not match the verb's skeleton.
    #[error("invalid syntax. Usage: {usage}")]
    InvalidSyntax { usage: &'static str },

    /// The verb is not one of the supported commands.
    #[error("unrecognized command: {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Translate(#[from] TranslateError),
}

/// Convenience alias for results with [`BuildError`].
pub type Result<T> = std::result::Result<T, BuildError>;
