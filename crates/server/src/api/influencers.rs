//! Influencer API handlers.
//!
//! The query string is the filter UI's control state: each parameter
//! maps onto one field of the core `FilterState`, and every request
//! recomputes the filtered subset from the full catalog.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use soller_core::{
    apply, render_cards, CardList, CatalogStats, FilterState, FollowerTier, Influencer, Platform,
    QuickFilter, TierFilter,
};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct InfluencerQueryParams {
    /// Quick-filter pill: "all", "soller", "trending", or a category.
    #[serde(default)]
    pub category: Option<String>,
    /// Free-text search over name, handle, and bio.
    #[serde(default)]
    pub q: Option<String>,
    /// Follower tier: "all", "micro", "mid", "macro", "mega".
    #[serde(default)]
    pub followers: Option<String>,
    #[serde(default)]
    pub min_engagement: Option<f32>,
    #[serde(default)]
    pub min_price: Option<u64>,
    #[serde(default)]
    pub max_price: Option<u64>,
    #[serde(default)]
    pub location: Option<String>,
    /// Comma-separated required platforms (superset match).
    #[serde(default)]
    pub platforms: Option<String>,
}

impl InfluencerQueryParams {
    /// Map the query string onto a filter state. Unknown tier or
    /// platform names are caller errors, not silent defaults.
    fn into_filter_state(self) -> Result<FilterState, String> {
        let mut state = FilterState::default();

        if let Some(category) = self.category {
            state.quick = QuickFilter::parse(&category);
        }
        if let Some(q) = self.q {
            state.search = q;
        }
        if let Some(followers) = self.followers {
            state.tier = followers
                .parse::<TierFilter>()
                .map_err(|e| e.to_string())?;
        }
        if let Some(min_engagement) = self.min_engagement {
            state.min_engagement = min_engagement;
        }
        if let Some(min_price) = self.min_price {
            state.min_price = min_price;
        }
        if let Some(max_price) = self.max_price {
            state.max_price = max_price;
        }
        if let Some(location) = self.location {
            state.location = location;
        }
        if let Some(platforms) = self.platforms {
            state.platforms = platforms
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.parse::<Platform>().map_err(|e| e.to_string()))
                .collect::<Result<Vec<_>, _>>()?;
        }

        Ok(state)
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Facet values for the filter UI's pill row and selects.
#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub categories: Vec<String>,
    pub platforms: Vec<Platform>,
    pub tiers: Vec<FollowerTier>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/influencers
///
/// Filter the catalog and return the rendered card list.
pub async fn list_influencers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<InfluencerQueryParams>,
) -> Result<Json<CardList>, impl IntoResponse> {
    let filter_state = match params.into_filter_state() {
        Ok(fs) => fs,
        Err(message) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message }),
            ))
        }
    };

    let outcome = apply(state.catalog(), &filter_state);
    Ok(Json(render_cards(&outcome.influencers)))
}

/// GET /api/v1/influencers/{id}
///
/// Get a single influencer record.
pub async fn get_influencer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Influencer>, impl IntoResponse> {
    match state.catalog().get(&id) {
        Some(influencer) => Ok(Json(influencer.clone())),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Influencer not found: {}", id),
            }),
        )),
    }
}

/// GET /api/v1/catalog/stats
///
/// Get catalog statistics.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<CatalogStats> {
    Json(state.catalog().stats())
}

/// GET /api/v1/catalog/facets
///
/// Facet values available for filtering.
pub async fn get_facets(State(state): State<Arc<AppState>>) -> Json<FacetsResponse> {
    let catalog = state.catalog();
    Json(FacetsResponse {
        categories: catalog.categories(),
        platforms: catalog.platforms(),
        tiers: FollowerTier::ALL.to_vec(),
    })
}
