//! Shared application state for the people API.
//!
//! [`AppState`] is built once at startup and shared by every handler
//! behind an `Arc`. The dataset is immutable, so handlers read it without
//! any locking.

use swapi_data::Dataset;
use swapi_types::ServiceInfo;

use crate::json::{ApiJson, JsonStyle};

/// State shared by all request handlers.
#[derive(Debug)]
pub struct AppState {
    /// The fixture dataset served by `/api/people`.
    pub dataset: Dataset,
    /// Metadata served by `GET /`.
    pub service: ServiceInfo,
    /// Layout of JSON response bodies.
    pub json_style: JsonStyle,
}

impl AppState {
    /// Create state with pretty-printed responses.
    pub fn new(dataset: Dataset, service: ServiceInfo) -> Self {
        Self {
            dataset,
            service,
            json_style: JsonStyle::default(),
        }
    }

    /// Replace the response body layout.
    #[must_use]
    pub fn with_json_style(mut self, json_style: JsonStyle) -> Self {
        self.json_style = json_style;
        self
    }

    /// Wrap `value` as a response using the configured layout.
    pub const fn json<T>(&self, value: T) -> ApiJson<T> {
        ApiJson::new(value, self.json_style)
    }
}
