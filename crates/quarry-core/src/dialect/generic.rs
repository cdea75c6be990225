//! Library-default dialect behavior.
//!
//! ANSI-flavored defaults. Engine adapters override the points where their
//! backend disagrees.

use crate::command::Command;
use crate::executor::ScalarExecutor;

pub(super) fn parameter_prefix(_connection_info: &str) -> &'static str {
    "@"
}

pub(super) fn escape_identifier(identifier: &str) -> String {
    super::double_quote(identifier)
}

pub(super) fn exists_sql(table: &str, predicate: &str) -> String {
    // Always one row; a non-zero count is the found marker.
    format!("SELECT COUNT(*) FROM {table} WHERE {predicate}")
}

/// The default cannot read a generated key back. Adapters that can,
/// override with a backend-specific follow-up query.
pub(super) async fn execute_insert<E: ScalarExecutor>(
    executor: &mut E,
    command: &mut Command,
) -> Result<Option<i64>, E::Error> {
    let _ = executor.execute_scalar(command).await?;
    Ok(None)
}
