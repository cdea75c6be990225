//! SQL dialect strategies.
//!
//! Different backends disagree on how bound-parameter markers are written,
//! how identifiers are escaped, how existence checks are phrased, and how an
//! inserted row's generated key is read back. This module models those
//! differences as a closed set of strategies consulted by the executor at
//! exactly those four points.

mod generic;
mod informix;
mod sqlite;

use crate::command::Command;
use crate::executor::ScalarExecutor;

/// A backend dialect strategy.
///
/// Stateless and `Copy`: resolve one with [`Dialect::from_backend_name`] at
/// startup and pass it explicitly to every executor. Each operation is
/// independently callable, in any order, any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// ANSI-flavored library defaults.
    Generic,
    /// SQLite.
    Sqlite,
    /// IBM Informix.
    Informix,
}

impl Dialect {
    /// Resolves a configured backend name to a dialect.
    ///
    /// Matching is ASCII case-insensitive; unknown names return `None`.
    #[must_use]
    pub fn from_backend_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "generic" | "ansi" => Some(Self::Generic),
            "sqlite" | "sqlite3" => Some(Self::Sqlite),
            "informix" => Some(Self::Informix),
            _ => None,
        }
    }

    /// Returns the dialect name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Sqlite => "sqlite",
            Self::Informix => "informix",
        }
    }

    /// Returns the token that marks a bound parameter in generated SQL.
    ///
    /// Constant per backend. The connection descriptor is accepted because
    /// some engines pick their marker from connection settings; none of the
    /// supported variants do.
    #[must_use]
    pub fn parameter_prefix(self, connection_info: &str) -> &'static str {
        match self {
            Self::Generic => generic::parameter_prefix(connection_info),
            Self::Sqlite => sqlite::parameter_prefix(connection_info),
            Self::Informix => informix::parameter_prefix(connection_info),
        }
    }

    /// Escapes an identifier per backend rules.
    ///
    /// Not idempotent: escaping an already-escaped identifier quotes it
    /// again. Escape exactly once.
    #[must_use]
    pub fn escape_identifier(self, identifier: &str) -> String {
        match self {
            Self::Generic => generic::escape_identifier(identifier),
            Self::Sqlite => sqlite::escape_identifier(identifier),
            Self::Informix => informix::escape_identifier(identifier),
        }
    }

    /// Returns the existence-check SQL for a table and predicate.
    ///
    /// The query is valid whatever the table holds and yields at most one
    /// row; a non-zero scalar is the "found" marker.
    #[must_use]
    pub fn exists_sql(self, table: &str, predicate: &str) -> String {
        match self {
            Self::Generic => generic::exists_sql(table, predicate),
            Self::Sqlite => sqlite::exists_sql(table, predicate),
            Self::Informix => informix::exists_sql(table, predicate),
        }
    }

    /// Executes an insert command and retrieves the generated key.
    ///
    /// The insert runs exactly once through `executor`. Backends that do not
    /// report the key in the insert's own result issue exactly one
    /// additional read-only query on the same executor, and therefore the
    /// same connection; running the follow-up elsewhere can observe another
    /// session's value. `Ok(None)` means the backend cannot report a key.
    /// No transaction is started and nothing is retried.
    ///
    /// `_key_column` is accepted for adapters that retrieve keys by column
    /// name (RETURNING-style engines); the supported variants read
    /// session-scoped identity state instead.
    ///
    /// # Errors
    ///
    /// Execution failures from `executor` are returned unchanged.
    pub async fn execute_insert<E: ScalarExecutor>(
        self,
        executor: &mut E,
        command: &mut Command,
        _key_column: &str,
    ) -> Result<Option<i64>, E::Error> {
        match self {
            Self::Generic => generic::execute_insert(executor, command).await,
            Self::Sqlite => sqlite::execute_insert(executor, command).await,
            Self::Informix => informix::execute_insert(executor, command).await,
        }
    }
}

/// Double-quotes an identifier, doubling any embedded quote.
fn double_quote(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::SqlValue;

    /// Scripted executor that records every command it is handed and plays
    /// back canned results, front to back.
    struct RecordingExecutor {
        seen: Vec<Command>,
        results: Vec<Result<Option<i64>, String>>,
    }

    impl RecordingExecutor {
        fn new(results: Vec<Result<Option<i64>, String>>) -> Self {
            Self {
                seen: Vec::new(),
                results,
            }
        }
    }

    impl ScalarExecutor for RecordingExecutor {
        type Error = String;

        async fn execute_scalar(&mut self, command: &Command) -> Result<Option<i64>, String> {
            self.seen.push(command.clone());
            self.results.remove(0)
        }
    }

    fn insert_command() -> Command {
        Command::new("INSERT INTO orders (reference) VALUES (?)").bind("a-1")
    }

    #[test]
    fn test_from_backend_name() {
        assert_eq!(Dialect::from_backend_name("informix"), Some(Dialect::Informix));
        assert_eq!(Dialect::from_backend_name("Informix"), Some(Dialect::Informix));
        assert_eq!(Dialect::from_backend_name("SQLITE3"), Some(Dialect::Sqlite));
        assert_eq!(Dialect::from_backend_name("ansi"), Some(Dialect::Generic));
        assert_eq!(Dialect::from_backend_name("oracle"), None);
    }

    #[test]
    fn test_name() {
        assert_eq!(Dialect::Informix.name(), "informix");
        assert_eq!(Dialect::Sqlite.name(), "sqlite");
        assert_eq!(Dialect::Generic.name(), "generic");
    }

    #[test]
    fn test_parameter_prefix_ignores_connection_info() {
        for info in ["", "Server=db1;Database=stores", ":memory:"] {
            assert_eq!(Dialect::Informix.parameter_prefix(info), "?");
            assert_eq!(Dialect::Sqlite.parameter_prefix(info), "?");
            assert_eq!(Dialect::Generic.parameter_prefix(info), "@");
        }
    }

    #[test]
    fn test_escape_identifier() {
        assert_eq!(Dialect::Informix.escape_identifier("order"), "order");
        assert_eq!(Dialect::Generic.escape_identifier("order"), "\"order\"");
        assert_eq!(
            Dialect::Sqlite.escape_identifier("weird\"name"),
            "\"weird\"\"name\""
        );
    }

    #[test]
    fn test_escape_identifier_is_not_idempotent() {
        let once = Dialect::Sqlite.escape_identifier("order");
        let twice = Dialect::Sqlite.escape_identifier(&once);
        assert_ne!(once, twice);
    }

    #[test]
    fn test_exists_sql_substitutes_both_slots() {
        for dialect in [Dialect::Generic, Dialect::Sqlite, Dialect::Informix] {
            let sql = dialect.exists_sql("orders", "status = 'open'");
            assert!(sql.contains("orders"), "{sql}");
            assert!(sql.contains("status = 'open'"), "{sql}");
        }
    }

    #[tokio::test]
    async fn test_informix_insert_is_two_step() {
        let mut exec = RecordingExecutor::new(vec![Ok(None), Ok(Some(42))]);
        let mut cmd = insert_command();

        let key = Dialect::Informix
            .execute_insert(&mut exec, &mut cmd, "id")
            .await
            .unwrap();

        assert_eq!(key, Some(42));
        assert_eq!(exec.seen.len(), 2);
        assert_eq!(exec.seen[0].sql(), "INSERT INTO orders (reference) VALUES (?)");
        assert_eq!(
            exec.seen[0].params(),
            &[SqlValue::Text(String::from("a-1"))]
        );
        assert!(exec.seen[1].sql().starts_with("SELECT DBINFO"));
        assert!(exec.seen[1].params().is_empty());
    }

    #[tokio::test]
    async fn test_sqlite_insert_is_two_step() {
        let mut exec = RecordingExecutor::new(vec![Ok(None), Ok(Some(7))]);
        let mut cmd = insert_command();

        let key = Dialect::Sqlite
            .execute_insert(&mut exec, &mut cmd, "id")
            .await
            .unwrap();

        assert_eq!(key, Some(7));
        assert_eq!(exec.seen.len(), 2);
        assert_eq!(exec.seen[1].sql(), "SELECT last_insert_rowid()");
        assert!(exec.seen[1].params().is_empty());
    }

    #[tokio::test]
    async fn test_generic_insert_reports_no_key() {
        let mut exec = RecordingExecutor::new(vec![Ok(None)]);
        let mut cmd = insert_command();

        let key = Dialect::Generic
            .execute_insert(&mut exec, &mut cmd, "id")
            .await
            .unwrap();

        assert_eq!(key, None);
        assert_eq!(exec.seen.len(), 1);
    }

    #[tokio::test]
    async fn test_insert_error_propagates_without_retry() {
        let mut exec =
            RecordingExecutor::new(vec![Err(String::from("unique constraint violated"))]);
        let mut cmd = insert_command();

        let err = Dialect::Informix
            .execute_insert(&mut exec, &mut cmd, "id")
            .await
            .unwrap_err();

        assert_eq!(err, "unique constraint violated");
        assert_eq!(exec.seen.len(), 1);
    }

    #[tokio::test]
    async fn test_key_query_error_propagates() {
        let mut exec =
            RecordingExecutor::new(vec![Ok(None), Err(String::from("connection lost"))]);
        let mut cmd = insert_command();

        let err = Dialect::Sqlite
            .execute_insert(&mut exec, &mut cmd, "id")
            .await
            .unwrap_err();

        assert_eq!(err, "connection lost");
        assert_eq!(exec.seen.len(), 2);
    }
}
