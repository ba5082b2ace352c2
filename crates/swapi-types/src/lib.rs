//! Shared type definitions for the SWAPI people service.
//!
//! Records parsed from the fixture files and the JSON shapes returned by the
//! API live here so the data and HTTP crates agree on one definition. Types
//! flow downstream to `TypeScript` via `ts-rs` for API consumers.
//!
//! # Modules
//!
//! - [`ids`] -- Opaque scalar record identifiers
//! - [`records`] -- Fixture envelope and per-entity attribute sets
//! - [`views`] -- Denormalized person view and response envelopes

pub mod ids;
pub mod records;
pub mod views;

// Re-export all public types at crate root for convenience.
pub use ids::EntityId;
pub use records::{Attributes, Film, Person, Planet, Record, Species, Starship, Vehicle};
pub use views::{PeopleResponse, PersonView, ServiceInfo};
