//! Error types for the rentlens engine.
//!
//! This module defines the centralized error type [`RentlensError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Malformed *user input* (bad numeric text, unknown query keys, inconsistent
//! ranges) is never an error: the engine absorbs it per the mutation and decode
//! contracts. These variants cover the I/O boundary only — catalog and
//! configuration files supplied by the host.

use thiserror::Error;

/// The main error type for rentlens operations.
///
/// This enum consolidates the error conditions that can occur at the engine's
/// I/O boundary: loading the catalog file and parsing host configuration.
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion.
#[derive(Debug, Error)]
pub enum RentlensError {
    /// Catalog file could not be parsed into listing records.
    ///
    /// The string contains a description of what went wrong.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be parsed. The string describes
    /// the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for rentlens operations.
///
/// This is a type alias for `std::result::Result<T, RentlensError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, RentlensError>;
