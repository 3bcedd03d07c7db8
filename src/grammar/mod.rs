//! SQL dialect grammars.
//!
//! Grammars are pure string-templating components invoked by a query-builder
//! pipeline; the only state they carry is the configured table prefix. Which
//! grammar a connection uses is decided at startup through the `*GrammarKind`
//! registry enums, never by resolving names at call time.

use std::str::FromStr;

use crate::error::{Error, InvalidOption};

mod query;
mod schema;

pub use query::OdbcQueryGrammar;
pub use schema::OdbcSchemaGrammar;

/// Shared identifier surface for both grammar families.
///
/// Identifier wrapping is a deliberate passthrough: ODBC dialects disagree on
/// quoting characters, so identifiers are emitted exactly as supplied (after
/// table-prefixing). Callers must not supply identifiers containing quoting
/// delimiters.
pub trait Grammar {
    /// The prefix prepended to every table name.
    fn table_prefix(&self) -> &str;

    /// Wrap a single identifier. Passthrough; see the trait-level note.
    fn wrap(&self, identifier: &str) -> String {
        identifier.to_owned()
    }

    /// Wrap a table name, applying the configured prefix.
    fn wrap_table(&self, table: &str) -> String {
        self.wrap(&format!("{}{}", self.table_prefix(), table))
    }

    /// Convert a list of column names into a comma-delimited wrapped list.
    fn columnize(&self, columns: &[String]) -> String {
        columns
            .iter()
            .map(|c| self.wrap(c))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Prepend `prefix` (plus a space) to every value in the list.
pub(crate) fn prefix_array(prefix: &str, values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| format!("{} {}", prefix, v))
        .collect()
}

/// Selects the query-dialect grammar a connection is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryGrammarKind {
    #[default]
    Odbc,
}

impl QueryGrammarKind {
    pub(crate) fn build(self, table_prefix: impl Into<String>) -> OdbcQueryGrammar {
        match self {
            QueryGrammarKind::Odbc => OdbcQueryGrammar::new(table_prefix),
        }
    }
}

impl FromStr for QueryGrammarKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "odbc" => Ok(QueryGrammarKind::Odbc),
            other => Err(Error::config(InvalidOption(format!(
                "unknown query grammar {:?}; the only supported value is \"odbc\"",
                other
            )))),
        }
    }
}

/// Selects the schema-dialect grammar a connection is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaGrammarKind {
    #[default]
    Odbc,
}

impl SchemaGrammarKind {
    pub(crate) fn build(self, table_prefix: impl Into<String>) -> OdbcSchemaGrammar {
        match self {
            SchemaGrammarKind::Odbc => OdbcSchemaGrammar::new(table_prefix),
        }
    }
}

impl FromStr for SchemaGrammarKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "odbc" => Ok(SchemaGrammarKind::Odbc),
            other => Err(Error::config(InvalidOption(format!(
                "unknown schema grammar {:?}; the only supported value is \"odbc\"",
                other
            )))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_kinds_resolve_from_config_values() {
        assert_eq!("odbc".parse::<QueryGrammarKind>().unwrap(), QueryGrammarKind::Odbc);
        assert_eq!(
            "odbc".parse::<SchemaGrammarKind>().unwrap(),
            SchemaGrammarKind::Odbc
        );
    }

    #[test]
    fn unknown_grammar_kind_is_a_configuration_error() {
        let err = "mysql".parse::<SchemaGrammarKind>().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn wrap_table_applies_prefix_without_quoting() {
        let grammar = SchemaGrammarKind::Odbc.build("app_");
        assert_eq!(grammar.wrap_table("users"), "app_users");
        assert_eq!(grammar.wrap("name"), "name");
    }
}
