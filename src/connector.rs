use crate::error::Error;
use crate::options::OdbcConnectOptions;

/// Opens ODBC connection handles.
///
/// A single, unretried attempt per call; pooling and reconnection belong to the
/// caller. The returned handle is owned by the caller, typically wrapped by an
/// [`OdbcConnection`](crate::connection::OdbcConnection).
#[derive(Debug, Default)]
pub struct OdbcConnector;

impl OdbcConnector {
    /// Establish a database connection.
    pub fn connect(options: &OdbcConnectOptions) -> Result<odbc_api::Connection<'static>, Error> {
        let env =
            odbc_api::environment().map_err(|e| Error::Configuration(e.to_string().into()))?;

        log::trace!("opening ODBC connection");

        let conn = env
            .connect_with_connection_string(options.connection_string(), Default::default())?;

        Ok(conn)
    }
}
