//! ODBC database driver adapter (via `odbc-api`).
//!
//! Lets a query-builder pipeline talk to data sources through ODBC instead of
//! a native database protocol. Three pieces:
//!
//! - [`OdbcConnector`] opens a driver handle from an ODBC connection string.
//! - [`OdbcConnection`] wraps that handle together with the query and schema
//!   grammars resolved from the [`OdbcConnectOptions`].
//! - [`OdbcSchemaGrammar`] translates table blueprints into ODBC-compatible
//!   SQL strings.
//!
//! ## Connection Strings
//!
//! Standard ODBC connection strings are accepted:
//!
//! ```text
//! // DSN-based connection
//! DSN=MyDataSource;UID=myuser;PWD=mypassword
//!
//! // Driver-based connection
//! Driver={ODBC Driver 17 for SQL Server};Server=localhost;Database=test
//! ```
//!
//! The `odbc:` URL scheme prefix is optional but supported, and a bare name
//! (`odbc:MyDataSource`) is interpreted as a DSN name.
#![forbid(unsafe_code)]
#![warn(future_incompatible, rust_2018_idioms)]

pub mod connection;
pub mod connector;
pub mod error;
pub mod grammar;
pub mod options;
pub mod schema;

pub use connection::OdbcConnection;
pub use connector::OdbcConnector;
pub use error::{Error, OdbcDatabaseError, Result};
pub use grammar::{
    Grammar, OdbcQueryGrammar, OdbcSchemaGrammar, QueryGrammarKind, SchemaGrammarKind,
};
pub use options::{LogSettings, OdbcConnectOptions};
pub use schema::{Blueprint, ColumnSpec, ColumnType, DefaultValue, SchemaCommand};
