//! The generic executor.
//!
//! [`Database`] holds the pool and the dialect injected at startup, and runs
//! the two pipelines that consult the dialect: existence checks (identifier
//! formatting, then templating, then execution) and single-row inserts
//! (identifier and placeholder formatting, then the dialect's insert
//! protocol on one held session).

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;

use quarry_core::{Command, Dialect, ScalarExecutor, SqlValue};

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::session::Session;

/// The generic executor: a connection pool plus a dialect.
#[derive(Debug)]
pub struct Database {
    pool: SqlitePool,
    dialect: Dialect,
    connection_info: String,
}

impl Database {
    /// Wraps an existing pool with the given dialect.
    #[must_use]
    pub fn new(pool: SqlitePool, dialect: Dialect, connection_info: impl Into<String>) -> Self {
        Self {
            pool,
            dialect,
            connection_info: connection_info.into(),
        }
    }

    /// Resolves the configured backend and opens a pool.
    ///
    /// # Errors
    ///
    /// Fails on an unknown backend name or when the pool cannot connect.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let dialect = config.dialect()?;
        let pool = SqlitePoolOptions::new().connect(&config.url).await?;
        info!(backend = dialect.name(), "database connected");
        Ok(Self::new(pool, dialect, config.url.clone()))
    }

    /// Returns the dialect this executor was built with.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Acquires a session for multi-statement protocols.
    ///
    /// # Errors
    ///
    /// Returns the pool's error when no connection can be acquired.
    pub async fn session(&self) -> Result<Session> {
        Session::acquire(&self.pool).await
    }

    /// Returns whether any row of `table` matches `predicate`.
    ///
    /// The table name goes through the dialect's identifier escaping; the
    /// predicate is spliced as-is and may carry placeholders for `params`.
    ///
    /// # Errors
    ///
    /// Execution failures surface unchanged.
    pub async fn exists(
        &self,
        table: &str,
        predicate: &str,
        params: Vec<SqlValue>,
    ) -> Result<bool> {
        let table = self.dialect.escape_identifier(table);
        let sql = self.dialect.exists_sql(&table, predicate);
        let command = Command::new(sql).bind_all(params);

        let mut session = self.session().await?;
        let marker = session.execute_scalar(&command).await?;
        Ok(matches!(marker, Some(v) if v != 0))
    }

    /// Inserts one row and returns the generated key, if the backend
    /// reports one.
    ///
    /// # Errors
    ///
    /// Execution failures surface unchanged; nothing is retried.
    pub async fn insert(
        &self,
        table: &str,
        columns: &[&str],
        values: Vec<SqlValue>,
        key_column: &str,
    ) -> Result<Option<i64>> {
        let mut command = self.build_insert(table, columns, values);

        // Both steps of the insert protocol run on this one session.
        let mut session = self.session().await?;
        self.dialect
            .execute_insert(&mut session, &mut command, key_column)
            .await
    }

    fn build_insert(&self, table: &str, columns: &[&str], values: Vec<SqlValue>) -> Command {
        let prefix = self.dialect.parameter_prefix(&self.connection_info);
        let placeholders: Vec<String> = (0..values.len())
            .map(|i| {
                if prefix == "?" {
                    String::from("?")
                } else {
                    format!("{prefix}{i}")
                }
            })
            .collect();

        let column_list: Vec<String> = columns
            .iter()
            .map(|c| self.dialect.escape_identifier(c))
            .collect();

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.dialect.escape_identifier(table),
            column_list.join(", "),
            placeholders.join(", ")
        );
        Command::new(sql).bind_all(values)
    }
}
