use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;

use crate::error::{Error, InvalidOption};
use crate::grammar::{QueryGrammarKind, SchemaGrammarKind};

/// Statement-logging configuration carried by the connect options.
#[derive(Debug, Clone)]
pub struct LogSettings {
    pub statements_level: LevelFilter,
    pub slow_statements_level: LevelFilter,
    pub slow_statements_duration: Duration,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            statements_level: LevelFilter::Debug,
            slow_statements_level: LevelFilter::Warn,
            slow_statements_duration: Duration::from_secs(1),
        }
    }
}

impl LogSettings {
    pub fn log_statements(&mut self, level: LevelFilter) {
        self.statements_level = level;
    }

    pub fn log_slow_statements(&mut self, level: LevelFilter, duration: Duration) {
        self.slow_statements_level = level;
        self.slow_statements_duration = duration;
    }
}

/// Options for connecting to an ODBC data source.
///
/// Constructed once, read-only thereafter. Beyond the raw ODBC connection
/// string this carries the adapter-level settings the driver itself does not
/// know about: the logical database name, the table-name prefix handed to the
/// grammars, and which grammar dialects the connection is built with.
#[derive(Clone)]
pub struct OdbcConnectOptions {
    pub(crate) conn_str: String,
    pub(crate) database: Option<String>,
    pub(crate) table_prefix: String,
    pub(crate) query_grammar: QueryGrammarKind,
    pub(crate) schema_grammar: SchemaGrammarKind,
    pub(crate) log_settings: LogSettings,
}

impl OdbcConnectOptions {
    /// Build options from a raw ODBC connection string (`Key=Value;...`).
    pub fn new(conn_str: impl Into<String>) -> Self {
        Self {
            conn_str: conn_str.into(),
            database: None,
            table_prefix: String::new(),
            query_grammar: QueryGrammarKind::default(),
            schema_grammar: SchemaGrammarKind::default(),
            log_settings: LogSettings::default(),
        }
    }

    /// Build options from a host-framework configuration map.
    ///
    /// Recognized keys: `dsn` (required), `database`, `prefix`,
    /// `grammar.query`, `grammar.schema`. Unknown grammar names and a missing
    /// `dsn` fail with [`Error::Configuration`].
    pub fn from_config(config: &HashMap<String, String>) -> Result<Self, Error> {
        let dsn = config
            .get("dsn")
            .ok_or_else(|| Error::config(InvalidOption("missing required key \"dsn\"".into())))?;

        let mut options: Self = dsn.parse()?;

        if let Some(database) = config.get("database") {
            options = options.database(database.as_str());
        }

        if let Some(prefix) = config.get("prefix") {
            options = options.table_prefix(prefix.as_str());
        }

        if let Some(kind) = config.get("grammar.query") {
            options = options.query_grammar(kind.parse()?);
        }

        if let Some(kind) = config.get("grammar.schema") {
            options = options.schema_grammar(kind.parse()?);
        }

        Ok(options)
    }

    /// The raw connection string passed to the ODBC driver manager.
    pub fn connection_string(&self) -> &str {
        &self.conn_str
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn database_ref(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// Sets the prefix prepended to every table name by the grammars.
    pub fn table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }

    pub fn table_prefix_ref(&self) -> &str {
        &self.table_prefix
    }

    pub fn query_grammar(mut self, kind: QueryGrammarKind) -> Self {
        self.query_grammar = kind;
        self
    }

    pub fn schema_grammar(mut self, kind: SchemaGrammarKind) -> Self {
        self.schema_grammar = kind;
        self
    }

    pub fn log_statements(mut self, level: LevelFilter) -> Self {
        self.log_settings.log_statements(level);
        self
    }

    pub fn log_slow_statements(mut self, level: LevelFilter, duration: Duration) -> Self {
        self.log_settings.log_slow_statements(level, duration);
        self
    }
}

impl Debug for OdbcConnectOptions {
    // The connection string may embed credentials (UID=/PWD=).
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OdbcConnectOptions")
            .field("conn_str", &"<redacted>")
            .field("database", &self.database)
            .field("table_prefix", &self.table_prefix)
            .field("query_grammar", &self.query_grammar)
            .field("schema_grammar", &self.schema_grammar)
            .finish()
    }
}

impl FromStr for OdbcConnectOptions {
    type Err = Error;

    /// Parse a connection string into a set of connection options.
    ///
    /// Accepted forms:
    /// - `odbc:DSN=Name;...` — scheme prefix is stripped
    /// - `odbc:Name` — interpreted as a bare DSN name
    /// - `DSN=Name;...` or any full ODBC connection string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut t = s.trim();
        if let Some(rest) = t.strip_prefix("odbc:") {
            t = rest;
        }

        if t.is_empty() {
            return Err(Error::config(InvalidOption(
                "empty ODBC connection string".into(),
            )));
        }

        let conn_str = if t.contains('=') {
            t.to_string()
        } else {
            // Bare DSN name
            format!("DSN={}", t)
        };

        Ok(Self::new(conn_str))
    }
}
