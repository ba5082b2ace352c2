//! Error types for the server binary.
//!
//! [`AppError`] is the top-level error type that wraps all possible
//! failure modes during startup and serving.

/// Top-level error for the server binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// Fixture loading failed.
    #[error("dataset error: {source}")]
    Dataset {
        /// The underlying load error.
        #[from]
        source: swapi_data::LoadError,
    },

    /// Strict mode found people whose homeworld does not resolve.
    #[error("dataset integrity error: {count} people have an unresolved homeworld")]
    Integrity {
        /// Number of affected people.
        count: usize,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: swapi_api::ServerError,
    },
}
