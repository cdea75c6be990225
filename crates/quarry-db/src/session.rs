//! Scoped execution sessions.

use sqlx::pool::PoolConnection;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqlitePool, SqliteRow};
use sqlx::{Row, Sqlite};
use tracing::debug;

use quarry_core::{Command, ScalarExecutor, SqlValue};

use crate::error::{DbError, Result};

/// A unit of execution bound to one pooled connection.
///
/// Acquire once, use it for every statement of a multi-statement protocol,
/// release by dropping. Holding the connection for the session's lifetime is
/// what lets a dialect's insert-then-read-key sequence observe its own
/// session state.
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    /// Acquires a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns the pool's error when no connection can be acquired.
    pub async fn acquire(pool: &SqlitePool) -> Result<Self> {
        let conn = pool.acquire().await?;
        Ok(Self { conn })
    }
}

impl ScalarExecutor for Session {
    type Error = DbError;

    async fn execute_scalar(&mut self, command: &Command) -> Result<Option<i64>> {
        debug!(sql = command.sql(), "executing scalar");

        let mut query = sqlx::query(command.sql());
        for value in command.params() {
            query = bind_value(query, value);
        }

        let row = query.fetch_optional(&mut *self.conn).await?;
        match row {
            Some(row) => Ok(scalar_of(&row)?),
            None => Ok(None),
        }
    }
}

/// Binds a `SqlValue` parameter to a query.
fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &'q SqlValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(*b),
        SqlValue::Int(i) => query.bind(*i),
        SqlValue::Float(f) => query.bind(*f),
        SqlValue::Text(s) => query.bind(s.as_str()),
        SqlValue::Blob(b) => query.bind(b.as_slice()),
    }
}

/// Reads the first column as an optional integer.
fn scalar_of(row: &SqliteRow) -> Result<Option<i64>> {
    Ok(row.try_get::<Option<i64>, _>(0)?)
}
