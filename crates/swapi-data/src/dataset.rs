//! The immutable dataset shared by every request.
//!
//! A [`Dataset`] owns the six fixture collections in fixture order plus a
//! join index built once at construction. Nothing mutates it afterwards,
//! so it can be shared across worker threads behind an `Arc` without
//! locking.

use swapi_types::{EntityId, Film, Person, Planet, Record, Species, Starship, Vehicle};

use crate::index::JoinIndex;

/// The six raw collections, in fixture order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collections {
    /// Characters.
    pub people: Vec<Record<Person>>,
    /// Hyperdrive-capable craft.
    pub starships: Vec<Record<Starship>>,
    /// Atmospheric craft.
    pub vehicles: Vec<Record<Vehicle>>,
    /// Planets.
    pub planets: Vec<Record<Planet>>,
    /// Species.
    pub species: Vec<Record<Species>>,
    /// Films.
    pub films: Vec<Record<Film>>,
}

/// Read-only store over the fixture collections.
#[derive(Debug)]
pub struct Dataset {
    collections: Collections,
    index: JoinIndex,
}

impl Dataset {
    /// Build a dataset and its join index from raw collections.
    pub fn from_collections(collections: Collections) -> Self {
        let index = JoinIndex::build(&collections);
        Self { collections, index }
    }

    /// All raw collections.
    pub const fn collections(&self) -> &Collections {
        &self.collections
    }

    /// All people, in fixture order.
    pub fn people(&self) -> &[Record<Person>] {
        &self.collections.people
    }

    /// All starships, in fixture order.
    pub fn starships(&self) -> &[Record<Starship>] {
        &self.collections.starships
    }

    /// All vehicles, in fixture order.
    pub fn vehicles(&self) -> &[Record<Vehicle>] {
        &self.collections.vehicles
    }

    /// All planets, in fixture order.
    pub fn planets(&self) -> &[Record<Planet>] {
        &self.collections.planets
    }

    /// All species, in fixture order.
    pub fn species(&self) -> &[Record<Species>] {
        &self.collections.species
    }

    /// All films, in fixture order.
    pub fn films(&self) -> &[Record<Film>] {
        &self.collections.films
    }

    /// The first planet whose key is `pk`.
    pub fn planet(&self, pk: &EntityId) -> Option<&Record<Planet>> {
        self.index
            .planet(pk)
            .and_then(|position| self.collections.planets.get(position))
    }

    /// Starships whose pilot list contains `person`, in fixture order.
    pub fn starships_piloted_by(
        &self,
        person: &EntityId,
    ) -> impl Iterator<Item = &Record<Starship>> {
        select(&self.collections.starships, self.index.starships_piloted_by(person))
    }

    /// Vehicles whose pilot list contains `person`, in fixture order.
    pub fn vehicles_piloted_by(&self, person: &EntityId) -> impl Iterator<Item = &Record<Vehicle>> {
        select(&self.collections.vehicles, self.index.vehicles_piloted_by(person))
    }

    /// The first species, in fixture order, whose member list contains `person`.
    pub fn species_of(&self, person: &EntityId) -> Option<&Record<Species>> {
        self.index
            .species_of(person)
            .and_then(|position| self.collections.species.get(position))
    }

    /// Films whose character list contains `person`, in fixture order.
    pub fn films_featuring(&self, person: &EntityId) -> impl Iterator<Item = &Record<Film>> {
        select(&self.collections.films, self.index.films_featuring(person))
    }

    /// People whose homeworld matches no planet.
    ///
    /// Requests that touch one of these people fail with
    /// [`JoinError::HomeworldNotFound`](crate::JoinError::HomeworldNotFound).
    pub fn unresolved_homeworlds(&self) -> impl Iterator<Item = &Record<Person>> {
        self.collections
            .people
            .iter()
            .filter(move |person| self.index.planet(&person.fields.homeworld).is_none())
    }
}

fn select<'a, T>(
    records: &'a [Record<T>],
    positions: &'a [usize],
) -> impl Iterator<Item = &'a Record<T>> {
    positions
        .iter()
        .filter_map(move |&position| records.get(position))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn embedded() -> Dataset {
        Dataset::embedded().unwrap()
    }

    #[test]
    fn accessors_preserve_fixture_order() {
        let dataset = embedded();
        let first = dataset.people().first().unwrap();
        assert_eq!(first.fields.attributes.text("name"), Some("Luke Skywalker"));
        let last = dataset.people().last().unwrap();
        assert_eq!(last.fields.attributes.text("name"), Some("Ackbar"));
        let film = dataset.films().first().unwrap();
        assert_eq!(film.fields.attributes.text("title"), Some("A New Hope"));
    }

    #[test]
    fn planet_lookup_by_key() {
        let dataset = embedded();
        let planet = dataset.planet(&EntityId::from(22)).unwrap();
        assert_eq!(planet.fields.attributes.text("name"), Some("Corellia"));
        assert!(dataset.planet(&EntityId::from(9999)).is_none());
        assert!(dataset.planet(&EntityId::from("22")).is_none());
    }

    #[test]
    fn duplicate_planet_keys_resolve_to_first() {
        let mut collections = embedded().collections().clone();
        let mut shadow = collections.planets.first().unwrap().clone();
        shadow.fields.attributes.insert("name", "Shadow Tatooine");
        collections.planets.push(shadow);

        let dataset = Dataset::from_collections(collections);
        let planet = dataset.planet(&EntityId::from(1)).unwrap();
        assert_eq!(planet.fields.attributes.text("name"), Some("Tatooine"));
    }

    #[test]
    fn embedded_fixtures_are_consistent() {
        let dataset = embedded();
        assert_eq!(dataset.unresolved_homeworlds().count(), 0);
    }

    #[test]
    fn reports_people_with_missing_homeworld() {
        let mut collections = embedded().collections().clone();
        collections
            .planets
            .retain(|planet| planet.pk != EntityId::from(22));

        let dataset = Dataset::from_collections(collections);
        let names: Vec<&str> = dataset
            .unresolved_homeworlds()
            .filter_map(|person| person.fields.attributes.text("name"))
            .collect();
        assert_eq!(names, vec!["Han Solo", "Wedge Antilles"]);
    }
}
