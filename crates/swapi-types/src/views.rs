//! Response shapes served by the people API.
//!
//! A [`PersonView`] is a person's flattened attributes plus the five joined
//! collections. It is computed per request and never stored.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::EntityId;
use crate::records::{Film, Person, Planet, Species, Starship, Vehicle};

/// A person denormalized with everything it references or is referenced by.
///
/// Serializes as `{ pk, name, height, ..., starships, vehicles,
/// homeworldDetails, specieDetails, films }`. `specieDetails` is omitted
/// when the person belongs to no species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PersonView {
    /// The person's primary key.
    pub pk: EntityId,
    /// The person's own attributes, flattened into the view.
    #[serde(flatten)]
    pub person: Person,
    /// Starships listing this person as a pilot.
    pub starships: Vec<Starship>,
    /// Vehicles listing this person as a pilot.
    pub vehicles: Vec<Vehicle>,
    /// The planet referenced by `homeworld`.
    #[serde(rename = "homeworldDetails")]
    pub homeworld_details: Planet,
    /// The first species listing this person as a member.
    #[serde(rename = "specieDetails", default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(rename = "specieDetails", optional)]
    pub specie_details: Option<Species>,
    /// Films listing this person as a character.
    pub films: Vec<Film>,
}

/// One page of the people listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PeopleResponse {
    /// Total number of people in the dataset, independent of the page.
    pub count: usize,
    /// The enriched people on the requested page.
    pub results: Vec<PersonView>,
}

/// Service metadata returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ServiceInfo {
    /// Package name.
    pub name: String,
    /// Package description.
    pub description: String,
    /// Package version.
    pub version: String,
}
