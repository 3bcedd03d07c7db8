//! Live-connection tests. These need a reachable data source, so they only
//! run when a connection string is supplied:
//!
//! ```sh
//! ODBC_DSN='DSN=MyDataSource' cargo test -- --ignored
//! ```

use odbc_adapter::{OdbcConnectOptions, OdbcConnection};

fn options() -> anyhow::Result<OdbcConnectOptions> {
    let dsn = std::env::var("ODBC_DSN")?;
    Ok(dsn.parse()?)
}

#[test]
#[ignore = "requires a live ODBC data source in ODBC_DSN"]
fn it_connects_and_pings() -> anyhow::Result<()> {
    let mut conn = OdbcConnection::establish(&options()?)?;
    conn.ping()?;
    conn.close()?;
    Ok(())
}

#[test]
#[ignore = "requires a live ODBC data source in ODBC_DSN"]
fn it_reports_a_dbms_name() -> anyhow::Result<()> {
    let mut conn = OdbcConnection::establish(&options()?)?;
    let name = conn.dbms_name()?;
    assert!(!name.is_empty());
    Ok(())
}

#[test]
#[ignore = "requires a live ODBC data source in ODBC_DSN"]
fn it_runs_compiled_schema_sql() -> anyhow::Result<()> {
    use odbc_adapter::schema::Blueprint;

    let mut conn = OdbcConnection::establish(&options()?)?;

    let mut table = Blueprint::new("odbc_adapter_smoke");
    table.integer("id");
    table.string("name", 64).nullable(true);

    let create = conn.schema_grammar().compile_create(&table);
    let drop = conn.schema_grammar().compile_drop_if_exists(&table);

    conn.execute_unprepared(&drop)?;
    conn.execute_unprepared(&create)?;
    conn.execute_unprepared(&drop)?;
    Ok(())
}
