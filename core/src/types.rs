//! Table and column model produced by the schema translator.
//!
//! The translator reads flag tokens into these types and the types render
//! themselves as SQL. Keeping the per-column state in a structured record
//! means the clause order inside a column definition is fixed in exactly
//! one place ([`ColumnDef::to_sql`]), independent of the order in which
//! modifiers were typed.

use std::fmt;

/// Declared column type, selected by a `--<type>` flag.
///
/// # Examples
///
/// ```
/// use fastdb_core::{Affinity, FieldType};
///
/// let ty = FieldType::from_flag("--bool").unwrap();
/// assert_eq!(ty, FieldType::Bool);
/// assert_eq!(ty.affinity(), Affinity::Integer);
/// assert!(FieldType::from_flag("bool").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Int,
    String,
    Float,
    Bool,
    Date,
    Blob,
    Text,
}

impl FieldType {
    pub const ALL: [FieldType; 7] = [
        FieldType::Int,
        FieldType::String,
        FieldType::Float,
        FieldType::Bool,
        FieldType::Date,
        FieldType::Blob,
        FieldType::Text,
    ];

    /// Parses a type flag such as `--int`. Bare names are not type flags.
    pub fn from_flag(token: &str) -> Option<Self> {
        let name = token.strip_prefix("--")?;
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldType::Int => "int",
            FieldType::String => "string",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Date => "date",
            FieldType::Blob => "blob",
            FieldType::Text => "text",
        }
    }

    /// Storage class the column is declared with.
    pub fn affinity(self) -> Affinity {
        match self {
            FieldType::Int | FieldType::Bool => Affinity::Integer,
            FieldType::Float => Affinity::Real,
            FieldType::String | FieldType::Date | FieldType::Blob | FieldType::Text => {
                Affinity::Text
            }
        }
    }
}

/// Declared storage class of a column in the emitted SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affinity {
    Integer,
    Real,
    Text,
}

impl Affinity {
    pub fn as_sql(self) -> &'static str {
        match self {
            Affinity::Integer => "INTEGER",
            Affinity::Real => "REAL",
            Affinity::Text => "TEXT",
        }
    }
}

impl fmt::Display for Affinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Per-column modifier flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    PrimaryKey,
    AutoIncrement,
    NotNull,
    Unique,
    /// Takes a literal operand.
    Default,
    /// Takes an FK spec operand.
    ForeignKey,
    /// Takes an action operand.
    OnDelete,
    /// Takes an action operand.
    OnUpdate,
}

impl Modifier {
    pub fn from_flag(token: &str) -> Option<Self> {
        let modifier = match token {
            "--pk" => Modifier::PrimaryKey,
            "--ai" => Modifier::AutoIncrement,
            "--notnull" => Modifier::NotNull,
            "--unique" => Modifier::Unique,
            "--default" => Modifier::Default,
            "--fk" => Modifier::ForeignKey,
            "--ondelete" => Modifier::OnDelete,
            "--onupdate" => Modifier::OnUpdate,
            _ => return None,
        };
        Some(modifier)
    }
}

/// Referential action for `ON DELETE` / `ON UPDATE`.
///
/// Parsed from the bare lower-case literals `cascade`, `restrict`,
/// `setnull`, `setdefault` and `noaction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FkAction {
    Cascade,
    Restrict,
    SetNull,
    SetDefault,
    NoAction,
}

impl FkAction {
    pub fn parse(token: &str) -> Option<Self> {
        let action = match token {
            "cascade" => FkAction::Cascade,
            "restrict" => FkAction::Restrict,
            "setnull" => FkAction::SetNull,
            "setdefault" => FkAction::SetDefault,
            "noaction" => FkAction::NoAction,
            _ => return None,
        };
        Some(action)
    }

    /// Lower-case SQL spelling. `cascade` and `restrict` are emitted as
    /// given; `setnull`, `setdefault` and `noaction` are split into
    /// `set null`, `set default` and `no action`, the only forms the
    /// engine parses.
    pub fn as_sql(self) -> &'static str {
        match self {
            FkAction::Cascade => "cascade",
            FkAction::Restrict => "restrict",
            FkAction::SetNull => "set null",
            FkAction::SetDefault => "set default",
            FkAction::NoAction => "no action",
        }
    }
}

/// The `(table, column)` pair named by an `--fk` operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FkTarget {
    pub table: String,
    pub column: String,
}

impl fmt::Display for FkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.table, self.column)
    }
}

/// Modifiers collected for one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnModifiers {
    pub primary_key: bool,
    pub autoincrement: bool,
    pub not_null: bool,
    pub unique: bool,
    /// Literal pasted after `DEFAULT`, verbatim.
    pub default: Option<String>,
    pub references: Option<FkTarget>,
    pub on_delete: Option<FkAction>,
    pub on_update: Option<FkAction>,
}

/// One column of a table being created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub field_type: FieldType,
    pub modifiers: ColumnModifiers,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            modifiers: ColumnModifiers::default(),
        }
    }

    /// Renders the column definition.
    ///
    /// Inline clauses always come out as `PRIMARY KEY`, `AUTOINCREMENT`,
    /// `NOT NULL`, `UNIQUE`, `DEFAULT`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastdb_core::{ColumnDef, FieldType};
    ///
    /// let mut price = ColumnDef::new("price", FieldType::Float);
    /// price.modifiers.default = Some("0.0".into());
    /// price.modifiers.not_null = true;
    /// assert_eq!(price.to_sql(), "price REAL NOT NULL DEFAULT 0.0");
    /// ```
    pub fn to_sql(&self) -> String {
        let m = &self.modifiers;
        let mut sql = format!("{} {}", self.name, self.field_type.affinity());
        if m.primary_key {
            sql.push_str(" PRIMARY KEY");
        }
        if m.autoincrement {
            sql.push_str(" AUTOINCREMENT");
        }
        if m.not_null {
            sql.push_str(" NOT NULL");
        }
        if m.unique {
            sql.push_str(" UNIQUE");
        }
        if let Some(literal) = &m.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(literal);
        }
        sql
    }

    /// Renders the table-level `FOREIGN KEY` constraint, if the column has
    /// a reference. Actions given without `--fk` are dropped.
    pub fn foreign_key_sql(&self) -> Option<String> {
        let target = self.modifiers.references.as_ref()?;
        let mut sql = format!("FOREIGN KEY({}) REFERENCES {target}", self.name);
        if let Some(action) = self.modifiers.on_delete {
            sql.push_str(" ON DELETE ");
            sql.push_str(action.as_sql());
        }
        if let Some(action) = self.modifiers.on_update {
            sql.push_str(" ON UPDATE ");
            sql.push_str(action.as_sql());
        }
        Some(sql)
    }
}

/// A table to create: name plus columns in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    pub name: String,
    pub columns: Vec<ColumnDef>,
}

impl TableDef {
    /// Renders a single `CREATE TABLE` statement.
    ///
    /// Column definitions come first in declaration order, then one
    /// `FOREIGN KEY` line per referencing column, in the same order.
    pub fn to_sql(&self) -> String {
        let lines: Vec<String> = self
            .columns
            .iter()
            .map(ColumnDef::to_sql)
            .chain(self.columns.iter().filter_map(ColumnDef::foreign_key_sql))
            .map(|line| format!("  {line}"))
            .collect();

        format!("CREATE TABLE {} (\n{}\n);", self.name, lines.join(",\n"))
    }
}
