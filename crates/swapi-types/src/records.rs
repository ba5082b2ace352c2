//! Fixture records and their attribute sets.
//!
//! Every fixture file is an array of `{ "model", "pk", "fields" }` objects.
//! [`Record`] carries the envelope; the structs below are the `fields`
//! payloads, which are also what the people endpoint embeds when it
//! denormalizes a person.
//!
//! Only the keys the joins read are typed. Every other attribute is kept
//! verbatim in [`Attributes`] and written back out unchanged, so a dataset
//! export with extra or differently shaped descriptive fields still loads
//! and is served as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::ids::EntityId;

/// A single fixture record: primary key plus attribute set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<T> {
    /// Primary key, unique within its collection.
    pub pk: EntityId,
    /// The record's attributes.
    pub fields: T,
    /// Source model label (e.g. `resources.people`), if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

// ---------------------------------------------------------------------------
// Untyped attributes
// ---------------------------------------------------------------------------

/// Descriptive attributes of a record, kept exactly as they appear in the
/// fixture (names, measurements, `created`/`edited` timestamps, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    /// The raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The value stored under `key`, if it is a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Set `key`, returning the value it replaces.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }
}

/// Rendered as an open index signature so it can be flattened into the
/// typed join keys of each attribute set.
impl TS for Attributes {
    type WithoutGenerics = Self;

    fn name() -> String {
        String::from("{ [key: string]: unknown }")
    }

    fn inline() -> String {
        Self::name()
    }

    fn inline_flattened() -> String {
        Self::name()
    }

    fn decl() -> String {
        format!("type Attributes = {};", Self::inline())
    }

    fn decl_concrete() -> String {
        Self::decl()
    }
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

/// Attributes of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Person {
    /// Primary key of the person's home planet.
    pub homeworld: EntityId,
    /// Name, physical description, and timestamps.
    #[serde(flatten)]
    pub attributes: Attributes,
}

// ---------------------------------------------------------------------------
// Craft
// ---------------------------------------------------------------------------

/// Attributes of a hyperdrive-capable starship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Starship {
    /// People who have piloted this ship, in fixture order.
    #[serde(default)]
    pub pilots: Vec<EntityId>,
    /// Name, specifications (`MGLT`, `hyperdrive_rating`, ...), and timestamps.
    #[serde(flatten)]
    pub attributes: Attributes,
}

/// Attributes of a vehicle without hyperdrive capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Vehicle {
    /// People who have piloted this vehicle, in fixture order.
    #[serde(default)]
    pub pilots: Vec<EntityId>,
    /// Name, specifications, and timestamps.
    #[serde(flatten)]
    pub attributes: Attributes,
}

// ---------------------------------------------------------------------------
// Planets and species
// ---------------------------------------------------------------------------

/// Attributes of a planet. Planets are joined by primary key only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Planet {
    /// Name, climate, population, and timestamps.
    #[serde(flatten)]
    pub attributes: Attributes,
}

/// Attributes of a species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Species {
    /// Members of the species, in fixture order.
    #[serde(default)]
    pub people: Vec<EntityId>,
    /// Name, classification, `homeworld` (null for artificial species), and
    /// timestamps.
    #[serde(flatten)]
    pub attributes: Attributes,
}

// ---------------------------------------------------------------------------
// Films
// ---------------------------------------------------------------------------

/// Attributes of a film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Film {
    /// People appearing in the film, in fixture order.
    #[serde(default)]
    pub characters: Vec<EntityId>,
    /// Title, episode, crawl, credits, the other cast lists, and timestamps.
    #[serde(flatten)]
    pub attributes: Attributes,
}
