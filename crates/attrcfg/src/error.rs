//! Error types for config loading.

use thiserror::Error;

/// Errors that can occur while loading a config file.
///
/// Lookups never fail; everything here is surfaced from the one-time
/// parse pass.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error. Carries the underlying OS error code where one exists.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing storage for the arena or attribute table could not grow.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] std::collections::TryReserveError),
}

/// Result type for config operations.
pub type Result<T> = std::result::Result<T, Error>;
