//! # quarry-core
//!
//! Backend-neutral building blocks for the quarry data-access layer:
//!
//! - [`Dialect`]: a closed set of per-backend strategies consulted at four
//!   points of SQL generation and insert handling
//! - [`Command`]: a mutable statement handle (SQL text plus bound parameters)
//! - [`ScalarExecutor`]: the seam through which strategies run commands
//! - [`SqlValue`] / [`ToSqlValue`]: bound-parameter values
//!
//! This crate is pure: it owns no connections and performs no I/O of its
//! own. Drivers live in `quarry-db`.
//!
//! ## Example
//!
//! ```rust
//! use quarry_core::Dialect;
//!
//! let dialect = Dialect::Informix;
//! assert_eq!(dialect.parameter_prefix("any"), "?");
//! assert_eq!(dialect.escape_identifier("order"), "order");
//! ```

pub mod command;
pub mod dialect;
pub mod executor;
pub mod value;

pub use command::Command;
pub use dialect::Dialect;
pub use executor::ScalarExecutor;
pub use value::{SqlValue, ToSqlValue};
