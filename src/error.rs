use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use odbc_api::Error as OdbcApiError;

/// A specialized `Result` type for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents all the ways a method can fail within the adapter.
///
/// Connection-open and execution failures are surfaced unmodified from the
/// driver layer; nothing here retries or translates beyond wrapping.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Error occurred while parsing or validating connection options.
    #[error("error with configuration: {0}")]
    Configuration(#[source] Box<dyn StdError + Send + Sync + 'static>),

    /// Error returned from the ODBC driver.
    #[error("error returned from database: {0}")]
    Database(#[source] OdbcDatabaseError),

    /// Unexpected or invalid data encountered while communicating with the
    /// data source through the handle.
    #[error("encountered unexpected or invalid data: {0}")]
    Protocol(String),
}

impl Error {
    pub(crate) fn config(err: impl StdError + Send + Sync + 'static) -> Self {
        Error::Configuration(err.into())
    }
}

/// An error reported by the ODBC driver manager or the data-source driver.
///
/// Thin newtype over [`odbc_api::Error`]; the underlying diagnostics are passed
/// through untouched.
#[derive(Debug)]
pub struct OdbcDatabaseError(pub OdbcApiError);

impl Display for OdbcDatabaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl StdError for OdbcDatabaseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.0)
    }
}

impl OdbcDatabaseError {
    /// The driver does not expose a stable error code across data sources.
    pub fn code(&self) -> Option<Cow<'_, str>> {
        None
    }

    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &self.0
    }
}

impl From<OdbcApiError> for Error {
    fn from(value: OdbcApiError) -> Self {
        Error::Database(OdbcDatabaseError(value))
    }
}

/// Configuration failure with a plain-text reason, used for option parsing.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub(crate) struct InvalidOption(pub String);
