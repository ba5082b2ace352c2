//! In-memory dataset and join engine for the SWAPI people service.
//!
//! Six fixture collections (people, starships, vehicles, planets, species,
//! films) are loaded once at startup into an immutable [`Dataset`]. The
//! people listing pages through the people collection and denormalizes each
//! person by joining it against the other five.
//!
//! # Modules
//!
//! - [`dataset`] -- The immutable collections and lookup helpers.
//! - [`error`] -- Load-time and join-time error types.
//! - [`fixtures`] -- Loading collections from the bundled fixtures or a
//!   directory.
//! - [`join`] -- Per-person denormalization and the paged listing.
//! - [`pagination`] -- 1-based fixed-size page windows.

pub mod dataset;
pub mod error;
pub mod fixtures;
mod index;
pub mod join;
pub mod pagination;

// Re-export primary types at crate root.
pub use dataset::{Collections, Dataset};
pub use error::{JoinError, LoadError};
pub use fixtures::Collection;
pub use join::{enrich, people_page};
pub use pagination::{PAGE_SIZE, Page, paginate};
