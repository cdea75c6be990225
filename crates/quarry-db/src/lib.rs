//! # quarry-db
//!
//! The generic executor for the quarry data-access layer: a sqlx-backed
//! [`Session`] implementing the scalar-execution seam from `quarry-core`,
//! plus the existence-check and insert pipelines that consult the configured
//! [`Dialect`] at the templating, identifier-formatting, and insert phases.

pub mod config;
pub mod error;
pub mod executor;
pub mod session;

pub use config::DatabaseConfig;
pub use error::{DbError, Result};
pub use executor::Database;
pub use session::Session;

pub use quarry_core::{Command, Dialect, ScalarExecutor, SqlValue, ToSqlValue};
