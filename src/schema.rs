//! Schema data model consumed by the schema grammar.
//!
//! A [`Blueprint`] is built by the caller (one per table), holding an ordered
//! list of column specifications and an ordered list of schema commands. The
//! grammar reads it; nothing here mutates after hand-off.

use std::fmt::{self, Display, Formatter};

/// The declared type of a column, with its type-specific attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
    String { length: u16 },
    Text,
    Integer,
    Float { total: u8, places: u8 },
    Decimal { total: u8, places: u8 },
    Boolean,
    Enum { allowed: Vec<String> },
    Date,
    DateTime,
    Time,
    Timestamp,
    Binary,
}

/// A default value attached to a column.
///
/// Booleans render as `1`/`0`; everything else renders as its literal text.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Display for DefaultValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Bool(b) => write!(f, "{}", i32::from(*b)),
            DefaultValue::Int(i) => write!(f, "{}", i),
            DefaultValue::Float(v) => write!(f, "{}", v),
            DefaultValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        DefaultValue::Str(value.to_owned())
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        DefaultValue::Int(value)
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        DefaultValue::Bool(value)
    }
}

/// A single column specification: name, type tag, and modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub(crate) name: String,
    pub(crate) ty: ColumnType,
    pub(crate) nullable: bool,
    pub(crate) unsigned: bool,
    pub(crate) auto_increment: bool,
    pub(crate) default: Option<DefaultValue>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: false,
            unsigned: false,
            auto_increment: false,
            default: None,
        }
    }

    pub fn nullable(&mut self, nullable: bool) -> &mut Self {
        self.nullable = nullable;
        self
    }

    pub fn unsigned(&mut self) -> &mut Self {
        self.unsigned = true;
        self
    }

    pub fn auto_increment(&mut self) -> &mut Self {
        self.auto_increment = true;
        self
    }

    pub fn default_value(&mut self, value: impl Into<DefaultValue>) -> &mut Self {
        self.default = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> &ColumnType {
        &self.ty
    }
}

/// A schema operation recorded on a blueprint.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaCommand {
    /// Create the table from the blueprint's columns.
    Create,
    /// Add the blueprint's columns to an existing table.
    Add,
    Drop,
    DropIfExists,
    DropColumns { columns: Vec<String> },
    Primary { columns: Vec<String> },
    Unique { index: String, columns: Vec<String> },
    Index { index: String, columns: Vec<String> },
    DropPrimary,
    DropUnique { index: String },
    DropIndex { index: String },
    DropForeign { index: String },
    Rename { to: String },
}

/// An ordered description of a table: its columns plus the commands to compile.
#[derive(Debug, Clone, Default)]
pub struct Blueprint {
    table: String,
    columns: Vec<ColumnSpec>,
    commands: Vec<SchemaCommand>,
}

impl Blueprint {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn commands(&self) -> &[SchemaCommand] {
        &self.commands
    }

    /// Add a fully-specified column.
    pub fn column(&mut self, column: ColumnSpec) -> &mut Self {
        self.columns.push(column);
        self
    }

    pub fn command(&mut self, command: SchemaCommand) -> &mut Self {
        self.commands.push(command);
        self
    }

    // Column helpers, one per supported type tag.

    pub fn string(&mut self, name: impl Into<String>, length: u16) -> &mut ColumnSpec {
        self.push_column(name, ColumnType::String { length })
    }

    pub fn text(&mut self, name: impl Into<String>) -> &mut ColumnSpec {
        self.push_column(name, ColumnType::Text)
    }

    pub fn integer(&mut self, name: impl Into<String>) -> &mut ColumnSpec {
        self.push_column(name, ColumnType::Integer)
    }

    pub fn float(&mut self, name: impl Into<String>, total: u8, places: u8) -> &mut ColumnSpec {
        self.push_column(name, ColumnType::Float { total, places })
    }

    pub fn decimal(&mut self, name: impl Into<String>, total: u8, places: u8) -> &mut ColumnSpec {
        self.push_column(name, ColumnType::Decimal { total, places })
    }

    pub fn boolean(&mut self, name: impl Into<String>) -> &mut ColumnSpec {
        self.push_column(name, ColumnType::Boolean)
    }

    pub fn enumeration(
        &mut self,
        name: impl Into<String>,
        allowed: impl IntoIterator<Item = impl Into<String>>,
    ) -> &mut ColumnSpec {
        let allowed = allowed.into_iter().map(Into::into).collect();
        self.push_column(name, ColumnType::Enum { allowed })
    }

    pub fn date(&mut self, name: impl Into<String>) -> &mut ColumnSpec {
        self.push_column(name, ColumnType::Date)
    }

    pub fn date_time(&mut self, name: impl Into<String>) -> &mut ColumnSpec {
        self.push_column(name, ColumnType::DateTime)
    }

    pub fn time(&mut self, name: impl Into<String>) -> &mut ColumnSpec {
        self.push_column(name, ColumnType::Time)
    }

    pub fn timestamp(&mut self, name: impl Into<String>) -> &mut ColumnSpec {
        self.push_column(name, ColumnType::Timestamp)
    }

    pub fn binary(&mut self, name: impl Into<String>) -> &mut ColumnSpec {
        self.push_column(name, ColumnType::Binary)
    }

    // Command helpers.

    pub fn create(&mut self) -> &mut Self {
        self.command(SchemaCommand::Create)
    }

    pub fn add(&mut self) -> &mut Self {
        self.command(SchemaCommand::Add)
    }

    pub fn drop(&mut self) -> &mut Self {
        self.command(SchemaCommand::Drop)
    }

    pub fn drop_if_exists(&mut self) -> &mut Self {
        self.command(SchemaCommand::DropIfExists)
    }

    pub fn drop_columns(&mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
        self.command(SchemaCommand::DropColumns {
            columns: columns.into_iter().map(Into::into).collect(),
        })
    }

    pub fn primary(&mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
        self.command(SchemaCommand::Primary {
            columns: columns.into_iter().map(Into::into).collect(),
        })
    }

    pub fn unique(
        &mut self,
        index: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> &mut Self {
        self.command(SchemaCommand::Unique {
            index: index.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        })
    }

    pub fn index(
        &mut self,
        index: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> &mut Self {
        self.command(SchemaCommand::Index {
            index: index.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        })
    }

    pub fn drop_primary(&mut self) -> &mut Self {
        self.command(SchemaCommand::DropPrimary)
    }

    pub fn drop_unique(&mut self, index: impl Into<String>) -> &mut Self {
        self.command(SchemaCommand::DropUnique {
            index: index.into(),
        })
    }

    pub fn drop_index(&mut self, index: impl Into<String>) -> &mut Self {
        self.command(SchemaCommand::DropIndex {
            index: index.into(),
        })
    }

    pub fn drop_foreign(&mut self, index: impl Into<String>) -> &mut Self {
        self.command(SchemaCommand::DropForeign {
            index: index.into(),
        })
    }

    pub fn rename(&mut self, to: impl Into<String>) -> &mut Self {
        self.command(SchemaCommand::Rename { to: to.into() })
    }

    fn push_column(&mut self, name: impl Into<String>, ty: ColumnType) -> &mut ColumnSpec {
        self.columns.push(ColumnSpec::new(name, ty));
        self.columns.last_mut().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_render_as_literals() {
        assert_eq!(DefaultValue::Bool(true).to_string(), "1");
        assert_eq!(DefaultValue::Bool(false).to_string(), "0");
        assert_eq!(DefaultValue::Int(42).to_string(), "42");
        assert_eq!(DefaultValue::from("active").to_string(), "active");
    }

    #[test]
    fn blueprint_preserves_column_and_command_order() {
        let mut table = Blueprint::new("users");
        table.integer("id");
        table.string("name", 255);
        table.create();
        table.primary(["id"]);

        let names: Vec<_> = table.columns().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["id", "name"]);
        assert_eq!(
            table.commands(),
            [
                SchemaCommand::Create,
                SchemaCommand::Primary {
                    columns: vec!["id".into()]
                }
            ]
        );
    }
}
