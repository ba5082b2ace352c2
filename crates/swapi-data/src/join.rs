//! Denormalizing people against the rest of the dataset.
//!
//! [`enrich`] performs the five joins for a single person. The homeworld
//! join is strict: a person whose homeworld matches no planet fails with
//! [`JoinError::HomeworldNotFound`] instead of producing a partial view.
//! [`people_page`] is the whole listing operation: paginate, then enrich
//! each person on the page.

use swapi_types::{PeopleResponse, Person, PersonView, Record};

use crate::dataset::Dataset;
use crate::error::JoinError;
use crate::pagination::{Page, paginate};

/// Build the denormalized view of `person`.
///
/// # Errors
///
/// Returns [`JoinError::HomeworldNotFound`] if no planet carries the
/// person's homeworld key.
pub fn enrich(dataset: &Dataset, person: &Record<Person>) -> Result<PersonView, JoinError> {
    let pk = &person.pk;
    let homeworld = &person.fields.homeworld;

    let homeworld_details = dataset
        .planet(homeworld)
        .ok_or_else(|| JoinError::HomeworldNotFound {
            person: pk.clone(),
            homeworld: homeworld.clone(),
        })?
        .fields
        .clone();

    Ok(PersonView {
        pk: pk.clone(),
        person: person.fields.clone(),
        starships: dataset
            .starships_piloted_by(pk)
            .map(|ship| ship.fields.clone())
            .collect(),
        vehicles: dataset
            .vehicles_piloted_by(pk)
            .map(|vehicle| vehicle.fields.clone())
            .collect(),
        homeworld_details,
        specie_details: dataset.species_of(pk).map(|species| species.fields.clone()),
        films: dataset
            .films_featuring(pk)
            .map(|film| film.fields.clone())
            .collect(),
    })
}

/// One page of enriched people plus the total person count.
///
/// # Errors
///
/// Fails on the first person on the page whose join fails.
pub fn people_page(dataset: &Dataset, page: Page) -> Result<PeopleResponse, JoinError> {
    let people = dataset.people();
    let results = paginate(people, page)
        .iter()
        .map(|person| enrich(dataset, person))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PeopleResponse {
        count: people.len(),
        results,
    })
}
