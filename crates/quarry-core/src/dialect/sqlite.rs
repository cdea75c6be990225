//! SQLite dialect.

use crate::command::Command;
use crate::executor::ScalarExecutor;

/// Reads the rowid assigned by the last INSERT on this connection.
const LAST_ROWID_SQL: &str = "SELECT last_insert_rowid()";

pub(super) fn parameter_prefix(_connection_info: &str) -> &'static str {
    "?"
}

pub(super) fn escape_identifier(identifier: &str) -> String {
    // SQLite also accepts backticks and brackets; double quotes are standard.
    super::double_quote(identifier)
}

pub(super) fn exists_sql(table: &str, predicate: &str) -> String {
    format!("SELECT 1 AS found FROM {table} WHERE {predicate} LIMIT 1")
}

/// `last_insert_rowid()` is connection-scoped, so the follow-up query must
/// run on the same executor as the insert.
pub(super) async fn execute_insert<E: ScalarExecutor>(
    executor: &mut E,
    command: &mut Command,
) -> Result<Option<i64>, E::Error> {
    let _ = executor.execute_scalar(command).await?;
    command.set_sql(LAST_ROWID_SQL);
    command.clear_params();
    executor.execute_scalar(command).await
}
