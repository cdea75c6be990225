//! Backend configuration.
//!
//! Configuration is resolved once at startup and passed explicitly to the
//! executor; nothing in this crate consults ambient or static state.

use serde::Deserialize;

use quarry_core::Dialect;

use crate::error::{DbError, Result};

/// Process-wide database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Backend name, e.g. `"sqlite"` or `"informix"`.
    pub backend: String,
    /// Connection descriptor, handed to the driver and to parameter-prefix
    /// resolution.
    pub url: String,
}

impl DatabaseConfig {
    /// Creates a configuration from a backend name and connection descriptor.
    pub fn new(backend: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            url: url.into(),
        }
    }

    /// Resolves the configured backend name to a dialect.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::UnknownBackend`] when the name matches no dialect.
    pub fn dialect(&self) -> Result<Dialect> {
        Dialect::from_backend_name(&self.backend)
            .ok_or_else(|| DbError::UnknownBackend(self.backend.clone()))
    }
}
