use std::time::Instant;

use crate::connector::OdbcConnector;
use crate::error::Error;
use crate::grammar::{OdbcQueryGrammar, OdbcSchemaGrammar};
use crate::options::{LogSettings, OdbcConnectOptions};

/// A connection to an ODBC-accessible data source.
///
/// Wraps the live driver handle together with the grammar instances resolved
/// from the connect options. The grammars are composed in, not inherited:
/// they are selected once at establish time and read-only afterwards.
///
/// ODBC uses a blocking C API; every method here is a direct call-and-return
/// delegation into the driver, with any blocking happening inside it.
#[derive(Debug)]
pub struct OdbcConnection {
    conn: odbc_api::Connection<'static>,
    query_grammar: OdbcQueryGrammar,
    schema_grammar: OdbcSchemaGrammar,
    log_settings: LogSettings,
}

impl OdbcConnection {
    /// Open a connection described by the given options.
    pub fn establish(options: &OdbcConnectOptions) -> Result<Self, Error> {
        let conn = OdbcConnector::connect(options)?;

        Ok(Self {
            conn,
            query_grammar: options.query_grammar.build(options.table_prefix_ref()),
            schema_grammar: options.schema_grammar.build(options.table_prefix_ref()),
            log_settings: options.log_settings.clone(),
        })
    }

    /// The query-dialect grammar this connection was built with.
    pub fn query_grammar(&self) -> &OdbcQueryGrammar {
        &self.query_grammar
    }

    /// The schema-dialect grammar this connection was built with.
    pub fn schema_grammar(&self) -> &OdbcSchemaGrammar {
        &self.schema_grammar
    }

    /// Checks if the connection to the data source is still valid.
    pub fn ping(&mut self) -> Result<(), Error> {
        self.conn.execute("SELECT 1", (), None)?;
        Ok(())
    }

    /// The name of the DBMS behind this connection, as reported by the driver.
    pub fn dbms_name(&mut self) -> Result<String, Error> {
        Ok(self.conn.database_management_system_name()?)
    }

    /// Run a statement without parameters, discarding any result set.
    ///
    /// This is the execution path for compiled schema SQL; parameter binding
    /// and row decoding stay with the host framework.
    pub fn execute_unprepared(&mut self, sql: &str) -> Result<(), Error> {
        let start = Instant::now();
        let result = self.conn.execute(sql, (), None);
        self.log_statement(sql, start);
        result?;
        Ok(())
    }

    /// Explicitly close this connection, dropping the driver handle.
    pub fn close(self) -> Result<(), Error> {
        drop(self);
        Ok(())
    }

    fn log_statement(&self, sql: &str, start: Instant) {
        let elapsed = start.elapsed();
        let settings = &self.log_settings;

        let level = if elapsed >= settings.slow_statements_duration {
            settings.slow_statements_level
        } else {
            settings.statements_level
        };

        if let Some(level) = level.to_level() {
            log::log!(target: "odbc_adapter::statement", level, "{:?} elapsed={:?}", sql, elapsed);
        }
    }
}
