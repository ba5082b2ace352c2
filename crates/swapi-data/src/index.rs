//! Identifier-to-position indexes built once per dataset.
//!
//! Each join the people endpoint performs is defined as a linear scan over a
//! collection ("every starship whose pilots contain this person"). The index
//! answers the same questions in O(1) by precomputing, for every referenced
//! identifier, the positions of the matching records in fixture order.

use std::collections::HashMap;

use swapi_types::{EntityId, Record};

use crate::dataset::Collections;

/// Precomputed join lookups over a [`Collections`] value.
///
/// Positions index into the collections the index was built from.
#[derive(Debug, Default)]
pub(crate) struct JoinIndex {
    planet_by_pk: HashMap<EntityId, usize>,
    starships_by_pilot: HashMap<EntityId, Vec<usize>>,
    vehicles_by_pilot: HashMap<EntityId, Vec<usize>>,
    species_by_member: HashMap<EntityId, usize>,
    films_by_character: HashMap<EntityId, Vec<usize>>,
}

impl JoinIndex {
    pub(crate) fn build(collections: &Collections) -> Self {
        let index = Self {
            planet_by_pk: first_by_key(&collections.planets),
            starships_by_pilot: group_by_member(&collections.starships, |ship| &ship.pilots),
            vehicles_by_pilot: group_by_member(&collections.vehicles, |vehicle| &vehicle.pilots),
            species_by_member: first_by_member(&collections.species, |species| &species.people),
            films_by_character: group_by_member(&collections.films, |film| &film.characters),
        };

        tracing::debug!(
            planets = index.planet_by_pk.len(),
            pilots = index.starships_by_pilot.len(),
            drivers = index.vehicles_by_pilot.len(),
            species_members = index.species_by_member.len(),
            film_characters = index.films_by_character.len(),
            "Join index built"
        );

        index
    }

    pub(crate) fn planet(&self, pk: &EntityId) -> Option<usize> {
        self.planet_by_pk.get(pk).copied()
    }

    pub(crate) fn starships_piloted_by(&self, person: &EntityId) -> &[usize] {
        positions(&self.starships_by_pilot, person)
    }

    pub(crate) fn vehicles_piloted_by(&self, person: &EntityId) -> &[usize] {
        positions(&self.vehicles_by_pilot, person)
    }

    pub(crate) fn species_of(&self, person: &EntityId) -> Option<usize> {
        self.species_by_member.get(person).copied()
    }

    pub(crate) fn films_featuring(&self, person: &EntityId) -> &[usize] {
        positions(&self.films_by_character, person)
    }
}

fn positions<'a>(map: &'a HashMap<EntityId, Vec<usize>>, key: &EntityId) -> &'a [usize] {
    map.get(key).map(Vec::as_slice).unwrap_or_default()
}

/// Position of the first record carrying each primary key.
fn first_by_key<T>(records: &[Record<T>]) -> HashMap<EntityId, usize> {
    let mut map = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        map.entry(record.pk.clone()).or_insert(position);
    }
    map
}

/// Position of the first record whose member list contains each identifier.
fn first_by_member<T, F>(records: &[Record<T>], members: F) -> HashMap<EntityId, usize>
where
    F: Fn(&T) -> &Vec<EntityId>,
{
    let mut map = HashMap::new();
    for (position, record) in records.iter().enumerate() {
        for member in members(&record.fields) {
            map.entry(member.clone()).or_insert(position);
        }
    }
    map
}

/// Positions of every record whose member list contains each identifier.
///
/// A record lists each member at most once even if the member appears
/// twice in its list.
fn group_by_member<T, F>(records: &[Record<T>], members: F) -> HashMap<EntityId, Vec<usize>>
where
    F: Fn(&T) -> &Vec<EntityId>,
{
    let mut map: HashMap<EntityId, Vec<usize>> = HashMap::new();
    for (position, record) in records.iter().enumerate() {
        for member in members(&record.fields) {
            let positions = map.entry(member.clone()).or_default();
            if positions.last() != Some(&position) {
                positions.push(position);
            }
        }
    }
    map
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Dataset;

    /// Linear-scan definition of "records whose member list contains `id`".
    fn scan<T>(
        records: &[Record<T>],
        id: &EntityId,
        members: impl Fn(&T) -> &Vec<EntityId>,
    ) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| members(&record.fields).contains(id))
            .map(|(position, _)| position)
            .collect()
    }

    #[test]
    fn index_matches_linear_scan_for_every_person() {
        let dataset = Dataset::embedded().unwrap();
        let collections = dataset.collections();
        let index = JoinIndex::build(collections);

        for person in &collections.people {
            let pk = &person.pk;
            assert_eq!(
                index.starships_piloted_by(pk),
                scan(&collections.starships, pk, |s| &s.pilots).as_slice(),
                "starships for {pk}"
            );
            assert_eq!(
                index.vehicles_piloted_by(pk),
                scan(&collections.vehicles, pk, |v| &v.pilots).as_slice(),
                "vehicles for {pk}"
            );
            assert_eq!(
                index.films_featuring(pk),
                scan(&collections.films, pk, |f| &f.characters).as_slice(),
                "films for {pk}"
            );
            assert_eq!(
                index.species_of(pk),
                scan(&collections.species, pk, |s| &s.people).first().copied(),
                "species for {pk}"
            );
        }
    }

    #[test]
    fn repeated_pilot_is_listed_once() {
        let mut collections = Dataset::embedded().unwrap().collections().clone();
        let falcon = collections
            .starships
            .iter_mut()
            .find(|ship| ship.fields.attributes.text("name") == Some("Millennium Falcon"))
            .unwrap();
        falcon.fields.pilots.push(EntityId::from(14));

        let index = JoinIndex::build(&collections);
        let han = index.starships_piloted_by(&EntityId::from(14));
        let mut deduped = han.to_vec();
        deduped.dedup();
        assert_eq!(han, deduped.as_slice());
    }

    #[test]
    fn first_species_wins_when_membership_overlaps() {
        let mut collections = Dataset::embedded().unwrap().collections().clone();
        // Also list Chewbacca (13) as a Human, which precedes Wookie.
        collections
            .species
            .first_mut()
            .unwrap()
            .fields
            .people
            .push(EntityId::from(13));

        let index = JoinIndex::build(&collections);
        assert_eq!(index.species_of(&EntityId::from(13)), Some(0));
    }

    #[test]
    fn unknown_identifier_has_no_matches() {
        let dataset = Dataset::embedded().unwrap();
        let index = JoinIndex::build(dataset.collections());
        let ghost = EntityId::from("ghost");
        assert!(index.starships_piloted_by(&ghost).is_empty());
        assert!(index.species_of(&ghost).is_none());
        assert!(index.planet(&ghost).is_none());
    }
}
