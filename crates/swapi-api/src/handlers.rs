//! REST API endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Service name, description, and version |
//! | `GET` | `/api/people?page=N` | Ten enriched people per page plus the total count |

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::Uri;
use swapi_data::{Page, people_page};
use swapi_types::{PeopleResponse, ServiceInfo};

use crate::error::ApiError;
use crate::json::ApiJson;
use crate::state::AppState;

/// Raw query pairs, in request order.
///
/// Decoding into a struct would reject a repeated `page` key; the listing
/// never fails on its query string, so the pairs are scanned instead.
pub type QueryPairs = Vec<(String, String)>;

// ---------------------------------------------------------------------------
// GET / -- service metadata
// ---------------------------------------------------------------------------

/// Return the service's name, description, and version.
pub async fn about(State(state): State<Arc<AppState>>) -> ApiJson<ServiceInfo> {
    state.json(state.service.clone())
}

// ---------------------------------------------------------------------------
// GET /api/people -- paged, denormalized people
// ---------------------------------------------------------------------------

/// List one page of people, each joined with its starships, vehicles,
/// homeworld, species, and films.
///
/// # Query Parameters
///
/// - `page`: 1-based page number (default `1`). Values below 1 and
///   non-numeric values mean page 1; the first occurrence wins when the key
///   is repeated.
///
/// `count` in the response is the total number of people, not the number
/// on this page.
pub async fn list_people(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> Result<ApiJson<PeopleResponse>, ApiError> {
    let raw_page = pairs
        .iter()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.as_str());
    let page = Page::from_query(raw_page);

    let response = people_page(&state.dataset, page)?;
    tracing::debug!(
        page = page.number(),
        returned = response.results.len(),
        count = response.count,
        "Listed people"
    );

    Ok(state.json(response))
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// Reject any path without a route.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_owned())
}
