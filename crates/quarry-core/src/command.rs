//! Mutable command handles.
//!
//! A [`Command`] is a not-yet-executed SQL statement: its text plus the
//! parameters bound to it. The executor owns the connection; a dialect
//! strategy only reads and rewrites the handle it is given and triggers
//! execution through the caller-supplied [`ScalarExecutor`].
//!
//! [`ScalarExecutor`]: crate::executor::ScalarExecutor

use crate::value::{SqlValue, ToSqlValue};

/// A SQL statement handle: text plus bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    sql: String,
    params: Vec<SqlValue>,
}

impl Command {
    /// Creates a command with the given SQL text and no parameters.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Binds a parameter, in positional order.
    #[must_use]
    pub fn bind(mut self, value: impl ToSqlValue) -> Self {
        self.params.push(value.to_sql_value());
        self
    }

    /// Binds a batch of parameters, in positional order.
    #[must_use]
    pub fn bind_all(mut self, values: Vec<SqlValue>) -> Self {
        self.params.extend(values);
        self
    }

    /// Returns the SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the bound parameters, in positional order.
    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Replaces the SQL text, keeping the bound parameters.
    pub fn set_sql(&mut self, sql: impl Into<String>) {
        self.sql = sql.into();
    }

    /// Drops all bound parameters.
    ///
    /// Used when a strategy rewrites the handle into a parameterless
    /// follow-up query.
    pub fn clear_params(&mut self) {
        self.params.clear();
    }
}
