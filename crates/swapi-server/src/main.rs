//! Server binary for the SWAPI people API.
//!
//! Wires configuration, logging, the fixture dataset, and the HTTP server
//! together, then serves until Ctrl-C.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `swapi-config.yaml` and `SWAPI_*` variables
//! 2. Initialize structured logging (tracing)
//! 3. Load the dataset (bundled fixtures or `dataset.dir`)
//! 4. Report people whose homeworld does not resolve
//! 5. Serve the API

mod config;
mod error;

use std::sync::Arc;

use swapi_api::{AppState, JsonStyle};
use swapi_data::Dataset;
use swapi_types::ServiceInfo;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{DatasetConfig, LoggingConfig, ServiceConfig};
use crate::error::AppError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, dataset loading, or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = ServiceConfig::load().map_err(AppError::from)?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!(
        host = config.http.host,
        port = config.http.port,
        pretty_json = config.http.pretty_json,
        data_dir = config.dataset.dir.as_ref().map(|dir| dir.display().to_string()),
        strict = config.dataset.strict,
        "Configuration loaded"
    );

    // 3-4. Load and check the dataset.
    let dataset = load_dataset(&config.dataset)?;

    // 5. Serve.
    let state = Arc::new(
        AppState::new(dataset, service_info())
            .with_json_style(JsonStyle::from_flag(config.http.pretty_json)),
    );
    swapi_api::start_server(&config.server_config(), state)
        .await
        .map_err(AppError::from)?;

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter)),
        )
        .with_target(true)
        .init();
}

/// Metadata for `GET /`, taken from this package's manifest.
fn service_info() -> ServiceInfo {
    ServiceInfo {
        name: String::from(env!("CARGO_PKG_NAME")),
        description: String::from(env!("CARGO_PKG_DESCRIPTION")),
        version: String::from(env!("CARGO_PKG_VERSION")),
    }
}

/// Load fixtures and report people whose homeworld does not resolve.
///
/// Those people make every page they appear on fail, so strict mode
/// refuses to start instead.
fn load_dataset(config: &DatasetConfig) -> Result<Dataset, AppError> {
    let dataset = match &config.dir {
        Some(dir) => Dataset::load_dir(dir)?,
        None => Dataset::embedded()?,
    };

    let mut unresolved = 0_usize;
    for person in dataset.unresolved_homeworlds() {
        warn!(
            person = %person.pk,
            name = person.fields.attributes.text("name"),
            homeworld = %person.fields.homeworld,
            "Homeworld does not match any planet"
        );
        unresolved = unresolved.saturating_add(1);
    }

    if config.strict && unresolved > 0 {
        return Err(AppError::Integrity { count: unresolved });
    }
    Ok(dataset)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn service_info_comes_from_manifest() {
        let info = service_info();
        assert_eq!(info.name, "swapi-server");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert!(!info.description.is_empty());
    }

    #[test]
    fn loads_bundled_fixtures_by_default() {
        let dataset = load_dataset(&DatasetConfig::default()).unwrap();
        assert_eq!(dataset.people().len(), 26);
    }

    #[test]
    fn missing_data_dir_fails_startup() {
        let config = DatasetConfig {
            dir: Some(std::path::PathBuf::from("/nonexistent/swapi")),
            strict: false,
        };
        let err = load_dataset(&config).unwrap_err();
        assert!(matches!(err, AppError::Dataset { .. }));
    }
}
