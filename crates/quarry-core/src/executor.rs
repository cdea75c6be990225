//! The scalar-execution seam between dialect strategies and drivers.

use crate::command::Command;

/// Runs a [`Command`] and returns a single scalar, if any.
///
/// This is the only sanctioned way for a dialect strategy to execute a
/// command; strategies never touch a connection directly. One implementor
/// instance wraps exactly one held connection, so a strategy that issues a
/// follow-up query (the two-step insert protocol) is guaranteed to run both
/// statements on the same connection and transaction context. Interleaving
/// an unrelated statement on the same instance between the two steps
/// corrupts the retrieved key.
///
/// `Ok(None)` means the statement produced no row, or a NULL scalar. Errors
/// are the implementor's own type; strategies propagate them unchanged and
/// never retry.
#[allow(async_fn_in_trait)]
pub trait ScalarExecutor {
    /// The implementor's error type.
    type Error;

    /// Executes the command and returns the first column of its first row.
    ///
    /// # Errors
    ///
    /// Returns the implementor's error on any execution failure.
    async fn execute_scalar(&mut self, command: &Command) -> Result<Option<i64>, Self::Error>;
}
