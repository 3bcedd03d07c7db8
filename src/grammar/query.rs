use crate::grammar::Grammar;

/// The default query-dialect grammar.
///
/// ODBC uses positional `?` placeholders regardless of the backing DBMS, so the
/// query surface is limited to placeholder generation and the shared identifier
/// helpers from [`Grammar`].
#[derive(Debug, Clone)]
pub struct OdbcQueryGrammar {
    table_prefix: String,
}

impl OdbcQueryGrammar {
    pub fn new(table_prefix: impl Into<String>) -> Self {
        Self {
            table_prefix: table_prefix.into(),
        }
    }

    /// The placeholder emitted for a single bound parameter.
    pub fn parameter(&self) -> &'static str {
        "?"
    }

    /// A comma-delimited placeholder list for `count` bound parameters.
    pub fn parameterize(&self, count: usize) -> String {
        vec![self.parameter(); count].join(", ")
    }
}

impl Grammar for OdbcQueryGrammar {
    fn table_prefix(&self) -> &str {
        &self.table_prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterize_emits_positional_placeholders() {
        let grammar = OdbcQueryGrammar::new("");
        assert_eq!(grammar.parameterize(1), "?");
        assert_eq!(grammar.parameterize(3), "?, ?, ?");
        assert_eq!(grammar.parameterize(0), "");
    }

    #[test]
    fn columnize_joins_wrapped_identifiers() {
        let grammar = OdbcQueryGrammar::new("");
        let cols = vec!["id".to_string(), "name".to_string()];
        assert_eq!(grammar.columnize(&cols), "id, name");
    }
}
