//! Loading the six fixture collections.
//!
//! The bundled fixtures under `fixtures/` are compiled into the binary and
//! back [`Dataset::embedded`]. [`Dataset::load_dir`] reads the same six
//! files from a directory instead, which lets a deployment swap in a larger
//! export without rebuilding.

use std::path::Path;

use serde::de::DeserializeOwned;
use swapi_types::Record;
use tracing::{debug, info};

use crate::dataset::{Collections, Dataset};
use crate::error::LoadError;

/// One of the six fixture collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// `people.json`
    People,
    /// `starships.json`
    Starships,
    /// `vehicles.json`
    Vehicles,
    /// `planets.json`
    Planets,
    /// `species.json`
    Species,
    /// `films.json`
    Films,
}

impl Collection {
    /// Every collection, in load order.
    pub const ALL: [Self; 6] = [
        Self::People,
        Self::Starships,
        Self::Vehicles,
        Self::Planets,
        Self::Species,
        Self::Films,
    ];

    /// Collection name as used in file names and log fields.
    pub const fn name(self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Starships => "starships",
            Self::Vehicles => "vehicles",
            Self::Planets => "planets",
            Self::Species => "species",
            Self::Films => "films",
        }
    }

    /// Fixture file name for this collection.
    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }
}

impl core::fmt::Display for Collection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl Dataset {
    /// Parse the fixture set bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] if a bundled file is malformed.
    pub fn embedded() -> Result<Self, LoadError> {
        let collections = Collections {
            people: parse(Collection::People, include_str!("../fixtures/people.json"))?,
            starships: parse(Collection::Starships, include_str!("../fixtures/starships.json"))?,
            vehicles: parse(Collection::Vehicles, include_str!("../fixtures/vehicles.json"))?,
            planets: parse(Collection::Planets, include_str!("../fixtures/planets.json"))?,
            species: parse(Collection::Species, include_str!("../fixtures/species.json"))?,
            films: parse(Collection::Films, include_str!("../fixtures/films.json"))?,
        };
        Ok(loaded(collections, "embedded"))
    }

    /// Read the six fixture files from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if a file is missing or unreadable and
    /// [`LoadError::Parse`] if a file is not an array of records.
    pub fn load_dir(dir: &Path) -> Result<Self, LoadError> {
        let collections = Collections {
            people: read(dir, Collection::People)?,
            starships: read(dir, Collection::Starships)?,
            vehicles: read(dir, Collection::Vehicles)?,
            planets: read(dir, Collection::Planets)?,
            species: read(dir, Collection::Species)?,
            films: read(dir, Collection::Films)?,
        };
        Ok(loaded(collections, &dir.display().to_string()))
    }
}

fn loaded(collections: Collections, source: &str) -> Dataset {
    info!(
        source,
        people = collections.people.len(),
        starships = collections.starships.len(),
        vehicles = collections.vehicles.len(),
        planets = collections.planets.len(),
        species = collections.species.len(),
        films = collections.films.len(),
        "Dataset loaded"
    );
    Dataset::from_collections(collections)
}

fn read<T: DeserializeOwned>(
    dir: &Path,
    collection: Collection,
) -> Result<Vec<Record<T>>, LoadError> {
    let path = dir.join(collection.file_name());
    debug!(path = %path.display(), "Reading fixture file");
    let json = std::fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source })?;
    parse(collection, &json)
}

fn parse<T: DeserializeOwned>(
    collection: Collection,
    json: &str,
) -> Result<Vec<Record<T>>, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Parse { collection, source })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn fixtures_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    #[test]
    fn embedded_fixture_counts() {
        let dataset = Dataset::embedded().unwrap();
        assert_eq!(dataset.people().len(), 26);
        assert_eq!(dataset.starships().len(), 11);
        assert_eq!(dataset.vehicles().len(), 8);
        assert_eq!(dataset.planets().len(), 20);
        assert_eq!(dataset.species().len(), 8);
        assert_eq!(dataset.films().len(), 7);
    }

    #[test]
    fn load_dir_matches_embedded() {
        let from_disk = Dataset::load_dir(&fixtures_dir()).unwrap();
        let embedded = Dataset::embedded().unwrap();
        assert_eq!(from_disk.collections(), embedded.collections());
    }

    #[test]
    fn missing_directory_is_io_error() {
        let err = Dataset::load_dir(Path::new("/nonexistent/swapi-fixtures")).unwrap_err();
        assert!(
            matches!(&err, LoadError::Io { path, .. } if path.ends_with("people.json")),
            "expected an I/O error for people.json, got {err}"
        );
    }

    #[test]
    fn malformed_json_names_the_collection() {
        let err = parse::<swapi_types::Planet>(Collection::Planets, r#"{"pk": 1}"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse { collection: Collection::Planets, .. }));
        assert!(err.to_string().starts_with("failed to parse planets fixtures"));
    }

    #[test]
    fn starships_with_only_craft_columns_load() {
        let json = r#"[{
            "fields": {
                "pilots": [],
                "MGLT": "60",
                "starship_class": "corvette",
                "hyperdrive_rating": "2.0"
            },
            "model": "resources.starship",
            "pk": 2
        }]"#;
        let ships = parse::<swapi_types::Starship>(Collection::Starships, json).unwrap();
        let ship = ships.first().unwrap();
        assert!(ship.fields.pilots.is_empty());
        assert_eq!(ship.fields.attributes.text("starship_class"), Some("corvette"));
    }

    #[test]
    fn collection_file_names() {
        let names: Vec<String> = Collection::ALL.iter().map(|c| c.file_name()).collect();
        assert_eq!(
            names,
            vec![
                "people.json",
                "starships.json",
                "vehicles.json",
                "planets.json",
                "species.json",
                "films.json"
            ]
        );
    }
}
