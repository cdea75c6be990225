//! IBM Informix dialect.
//!
//! Informix differs from the library defaults at all four points: positional
//! `?` markers, identifiers left unquoted, `FIRST n` row limiting, and a
//! session-scoped `DBINFO` read for serial values.

use crate::command::Command;
use crate::executor::ScalarExecutor;

/// Reads the serial value assigned by the last INSERT on this session.
/// `DBINFO` requires a FROM clause; the `tabid = 1` catalog row is the
/// engine's canonical one-row source.
const LAST_SERIAL_SQL: &str = "SELECT DBINFO('sqlca.sqlerrd1') FROM systables WHERE tabid = 1";

pub(super) fn parameter_prefix(_connection_info: &str) -> &'static str {
    "?"
}

/// Identifiers pass through unquoted. Quoted identifiers require DELIMIDENT
/// on the connection and change case-comparison semantics for existing
/// schemas.
pub(super) fn escape_identifier(identifier: &str) -> String {
    String::from(identifier)
}

pub(super) fn exists_sql(table: &str, predicate: &str) -> String {
    format!("SELECT FIRST 1 1 AS found FROM {table} WHERE {predicate}")
}

pub(super) async fn execute_insert<E: ScalarExecutor>(
    executor: &mut E,
    command: &mut Command,
) -> Result<Option<i64>, E::Error> {
    let _ = executor.execute_scalar(command).await?;
    command.set_sql(LAST_SERIAL_SQL);
    command.clear_params();
    executor.execute_scalar(command).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings() {
        assert_eq!(parameter_prefix("informixserver=ol_prod"), "?");
        assert_eq!(escape_identifier("order"), "order");
        assert_eq!(
            exists_sql("orders", "status = ?"),
            "SELECT FIRST 1 1 AS found FROM orders WHERE status = ?"
        );
    }

    #[test]
    fn test_exists_sql_yields_at_most_one_row() {
        // FIRST 1 caps the result whatever the predicate matches.
        let sql = exists_sql("orders", "1=1");
        assert!(sql.starts_with("SELECT FIRST 1 "));
    }
}
