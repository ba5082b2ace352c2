//! Error types for the `swapi-data` crate.
//!
//! [`LoadError`] covers fixture loading, which only happens at startup.
//! [`JoinError`] covers request-time joins.

use std::path::PathBuf;

use swapi_types::EntityId;

use crate::fixtures::Collection;

/// Errors that can occur while loading fixture collections.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A fixture file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A fixture file was not a valid array of records.
    #[error("failed to parse {collection} fixtures: {source}")]
    Parse {
        /// The collection being parsed.
        collection: Collection,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

/// Errors that can occur while joining a person against the dataset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    /// The person's homeworld does not match any planet.
    #[error("homeworld {homeworld} of person {person} not found")]
    HomeworldNotFound {
        /// Primary key of the person being enriched.
        person: EntityId,
        /// The unresolved planet key.
        homeworld: EntityId,
    },
}
