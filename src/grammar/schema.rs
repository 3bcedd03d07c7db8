use crate::grammar::{prefix_array, Grammar};
use crate::schema::{Blueprint, ColumnSpec, ColumnType, SchemaCommand};

/// The schema-dialect grammar for ODBC data sources.
///
/// Every method is a fixed string template over the blueprint it is handed.
/// The compiled strings are the compatibility surface of this crate: a change
/// to any literal here is a breaking change for callers diffing emitted SQL.
#[derive(Debug, Clone)]
pub struct OdbcSchemaGrammar {
    table_prefix: String,
}

impl Grammar for OdbcSchemaGrammar {
    fn table_prefix(&self) -> &str {
        &self.table_prefix
    }
}

impl OdbcSchemaGrammar {
    pub fn new(table_prefix: impl Into<String>) -> Self {
        Self {
            table_prefix: table_prefix.into(),
        }
    }

    /// Compile one recorded command against its blueprint.
    pub fn compile(&self, blueprint: &Blueprint, command: &SchemaCommand) -> String {
        match command {
            SchemaCommand::Create => self.compile_create(blueprint),
            SchemaCommand::Add => self.compile_add(blueprint),
            SchemaCommand::Drop => self.compile_drop(blueprint),
            SchemaCommand::DropIfExists => self.compile_drop_if_exists(blueprint),
            SchemaCommand::DropColumns { columns } => self.compile_drop_column(blueprint, columns),
            SchemaCommand::Primary { columns } => self.compile_primary(blueprint, columns),
            SchemaCommand::Unique { index, columns } => {
                self.compile_unique(blueprint, index, columns)
            }
            SchemaCommand::Index { index, columns } => {
                self.compile_index(blueprint, index, columns)
            }
            SchemaCommand::DropPrimary => self.compile_drop_primary(blueprint),
            SchemaCommand::DropUnique { index } => self.compile_drop_unique(blueprint, index),
            SchemaCommand::DropIndex { index } => self.compile_drop_index(blueprint, index),
            SchemaCommand::DropForeign { index } => self.compile_drop_foreign(blueprint, index),
            SchemaCommand::Rename { to } => self.compile_rename(blueprint, to),
        }
    }

    /// Compile the query to determine if a table exists.
    ///
    /// The two placeholders bind the schema name and the table name.
    pub fn compile_table_exists(&self) -> &'static str {
        "select * from information_schema.tables where table_schema = ? and table_name = ?"
    }

    /// Compile a create table command.
    pub fn compile_create(&self, blueprint: &Blueprint) -> String {
        let columns = self.get_columns(blueprint).join(", ");

        format!("create table {} ({})", self.wrap_table(blueprint.table()), columns)
    }

    /// Compile an add-columns command.
    pub fn compile_add(&self, blueprint: &Blueprint) -> String {
        let table = self.wrap_table(blueprint.table());

        let columns = prefix_array("add", self.get_columns(blueprint));

        format!("alter table {} {}", table, columns.join(", "))
    }

    /// Compile a primary key command.
    pub fn compile_primary(&self, blueprint: &Blueprint, columns: &[String]) -> String {
        // A primary key carries no index name in this dialect.
        self.compile_key(blueprint, "primary key", "", columns)
    }

    /// Compile a unique key command.
    pub fn compile_unique(&self, blueprint: &Blueprint, index: &str, columns: &[String]) -> String {
        self.compile_key(blueprint, "unique", index, columns)
    }

    /// Compile a plain index command.
    pub fn compile_index(&self, blueprint: &Blueprint, index: &str, columns: &[String]) -> String {
        self.compile_key(blueprint, "index", index, columns)
    }

    fn compile_key(
        &self,
        blueprint: &Blueprint,
        key_type: &str,
        index: &str,
        columns: &[String],
    ) -> String {
        let columns = self.columnize(columns);

        let table = self.wrap_table(blueprint.table());

        format!("alter table {} add {} {}({})", table, key_type, index, columns)
    }

    /// Compile a drop table command.
    pub fn compile_drop(&self, blueprint: &Blueprint) -> String {
        format!("drop table {}", self.wrap_table(blueprint.table()))
    }

    /// Compile a drop table (if exists) command.
    pub fn compile_drop_if_exists(&self, blueprint: &Blueprint) -> String {
        format!("drop table if exists {}", self.wrap_table(blueprint.table()))
    }

    /// Compile a drop column command.
    pub fn compile_drop_column(&self, blueprint: &Blueprint, columns: &[String]) -> String {
        let wrapped = columns.iter().map(|c| self.wrap(c)).collect();
        let columns = prefix_array("drop", wrapped);

        let table = self.wrap_table(blueprint.table());

        format!("alter table {} {}", table, columns.join(", "))
    }

    /// Compile a drop primary key command.
    pub fn compile_drop_primary(&self, blueprint: &Blueprint) -> String {
        format!(
            "alter table {} drop primary key",
            self.wrap_table(blueprint.table())
        )
    }

    /// Compile a drop unique key command.
    pub fn compile_drop_unique(&self, blueprint: &Blueprint, index: &str) -> String {
        let table = self.wrap_table(blueprint.table());

        format!("alter table {} drop index {}", table, index)
    }

    /// Compile a drop index command.
    pub fn compile_drop_index(&self, blueprint: &Blueprint, index: &str) -> String {
        let table = self.wrap_table(blueprint.table());

        format!("alter table {} drop index {}", table, index)
    }

    /// Compile a drop foreign key command.
    pub fn compile_drop_foreign(&self, blueprint: &Blueprint, index: &str) -> String {
        let table = self.wrap_table(blueprint.table());

        format!("alter table {} drop foreign key {}", table, index)
    }

    /// Compile a rename table command. The prefix applies to both names.
    pub fn compile_rename(&self, blueprint: &Blueprint, to: &str) -> String {
        let from = self.wrap_table(blueprint.table());

        format!("rename table {} to {}", from, self.wrap_table(to))
    }

    /// Build the column definition list for a blueprint, modifiers applied in
    /// the fixed order unsigned, nullable, default, increment.
    fn get_columns(&self, blueprint: &Blueprint) -> Vec<String> {
        blueprint
            .columns()
            .iter()
            .map(|column| {
                let mut sql = format!("{} {}", self.wrap(column.name()), self.get_type(column));

                if let Some(modifier) = self.modify_unsigned(column) {
                    sql.push_str(modifier);
                }
                sql.push_str(self.modify_nullable(column));
                if let Some(modifier) = self.modify_default(column) {
                    sql.push_str(&modifier);
                }
                if let Some(modifier) = self.modify_increment(column) {
                    sql.push_str(modifier);
                }

                sql
            })
            .collect()
    }

    /// The SQL fragment for a column's declared type tag.
    fn get_type(&self, column: &ColumnSpec) -> String {
        match column.column_type() {
            ColumnType::String { length } => format!("varchar({})", length),
            ColumnType::Text => "text".to_owned(),
            ColumnType::Integer => "int".to_owned(),
            ColumnType::Float { total, places } => format!("float({}, {})", total, places),
            ColumnType::Decimal { total, places } => format!("decimal({}, {})", total, places),
            ColumnType::Boolean => "tinyint".to_owned(),
            ColumnType::Enum { allowed } => format!("enum('{}')", allowed.join("', '")),
            ColumnType::Date => "date".to_owned(),
            ColumnType::DateTime => "datetime".to_owned(),
            ColumnType::Time => "time".to_owned(),
            ColumnType::Timestamp => "timestamp default 0".to_owned(),
            ColumnType::Binary => "blob".to_owned(),
        }
    }

    fn modify_unsigned(&self, column: &ColumnSpec) -> Option<&'static str> {
        if matches!(column.column_type(), ColumnType::Integer) && column.unsigned {
            Some(" unsigned")
        } else {
            None
        }
    }

    fn modify_nullable(&self, column: &ColumnSpec) -> &'static str {
        if column.nullable {
            " null"
        } else {
            " not null"
        }
    }

    fn modify_default(&self, column: &ColumnSpec) -> Option<String> {
        column
            .default
            .as_ref()
            .map(|default| format!(" default '{}'", default))
    }

    fn modify_increment(&self, column: &ColumnSpec) -> Option<&'static str> {
        if matches!(column.column_type(), ColumnType::Integer) && column.auto_increment {
            Some(" auto_increment primary key")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DefaultValue;

    fn grammar() -> OdbcSchemaGrammar {
        OdbcSchemaGrammar::new("")
    }

    #[test]
    fn string_columns_carry_their_length() {
        let mut table = Blueprint::new("users");
        table.string("name", 255);
        assert_eq!(
            grammar().compile_create(&table),
            "create table users (name varchar(255) not null)"
        );
    }

    #[test]
    fn unsigned_applies_only_to_integers() {
        let mut table = Blueprint::new("t");
        table.integer("a").unsigned();
        table.string("b", 10).unsigned();
        assert_eq!(
            grammar().compile_create(&table),
            "create table t (a int unsigned not null, b varchar(10) not null)"
        );
    }

    #[test]
    fn nullable_emits_exactly_one_null_marker() {
        let mut table = Blueprint::new("t");
        table.text("a").nullable(true);
        table.text("b");
        assert_eq!(
            grammar().compile_create(&table),
            "create table t (a text null, b text not null)"
        );
    }

    #[test]
    fn defaults_are_single_quoted() {
        let mut table = Blueprint::new("t");
        table.string("status", 20).default_value("active");
        table.boolean("flag").default_value(DefaultValue::Bool(true));
        assert_eq!(
            grammar().compile_create(&table),
            "create table t (status varchar(20) not null default 'active', flag tinyint not null default '1')"
        );
    }

    #[test]
    fn increment_applies_only_to_integers() {
        let mut table = Blueprint::new("t");
        table.integer("id").auto_increment();
        assert_eq!(
            grammar().compile_create(&table),
            "create table t (id int not null auto_increment primary key)"
        );
    }

    #[test]
    fn every_type_tag_has_a_fixed_fragment() {
        let g = grammar();
        let mut table = Blueprint::new("t");
        table.string("a", 100);
        table.text("b");
        table.integer("c");
        table.float("d", 8, 2);
        table.decimal("e", 10, 4);
        table.boolean("f");
        table.enumeration("g", ["x", "y"]);
        table.date("h");
        table.date_time("i");
        table.time("j");
        table.timestamp("k");
        table.binary("l");

        let types: Vec<String> = table.columns().iter().map(|c| g.get_type(c)).collect();
        assert_eq!(
            types,
            [
                "varchar(100)",
                "text",
                "int",
                "float(8, 2)",
                "decimal(10, 4)",
                "tinyint",
                "enum('x', 'y')",
                "date",
                "datetime",
                "time",
                "timestamp default 0",
                "blob",
            ]
        );
    }

    #[test]
    fn table_prefix_applies_to_both_sides_of_a_rename() {
        let g = OdbcSchemaGrammar::new("app_");
        let table = Blueprint::new("users");
        assert_eq!(
            g.compile_rename(&table, "people"),
            "rename table app_users to app_people"
        );
    }
}
