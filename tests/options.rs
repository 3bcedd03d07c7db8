use std::collections::HashMap;

use odbc_adapter::{OdbcConnectOptions, QueryGrammarKind, SchemaGrammarKind};

#[test]
fn it_builds_options_from_a_framework_config_map() -> anyhow::Result<()> {
    let config: HashMap<String, String> = [
        ("dsn", "odbc:DSN=Accounts;UID=app"),
        ("database", "accounts"),
        ("prefix", "acct_"),
        ("grammar.query", "odbc"),
        ("grammar.schema", "odbc"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let options = OdbcConnectOptions::from_config(&config)?;

    assert_eq!(options.connection_string(), "DSN=Accounts;UID=app");
    assert_eq!(options.database_ref(), Some("accounts"));
    assert_eq!(options.table_prefix_ref(), "acct_");
    Ok(())
}

#[test]
fn it_parses_a_connection_string_and_applies_overrides() -> anyhow::Result<()> {
    let options = "odbc:Warehouse"
        .parse::<OdbcConnectOptions>()?
        .database("warehouse")
        .table_prefix("wh_")
        .query_grammar(QueryGrammarKind::Odbc)
        .schema_grammar(SchemaGrammarKind::Odbc);

    assert_eq!(options.connection_string(), "DSN=Warehouse");
    assert_eq!(options.table_prefix_ref(), "wh_");
    Ok(())
}
