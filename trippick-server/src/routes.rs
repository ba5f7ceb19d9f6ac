//! HTTP routes for the destination catalogue and swipe ledger.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use trippick_core::{Destination, NewSwipe, SwipeEvent};
use trippick_selector::{RegionFilter, SelectionError, pick_random};

use crate::{ApiError, AppState};

/// Build the API router over `state`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/destinations", get(list_destinations))
        .route("/api/destinations/region/{region}", get(destinations_by_region))
        .route(
            "/api/destinations/category/{category}",
            get(destinations_by_category),
        )
        .route("/api/destinations/random", get(random_destination))
        .route("/api/destinations/{id}", get(destination_by_id))
        .route("/api/swipe", post(record_swipe))
        .route("/api/liked/{session_id}", get(liked_destinations))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct RandomQuery {
    region: Option<String>,
}

async fn list_destinations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Destination>>, ApiError> {
    state
        .destinations
        .all()
        .map(Json)
        .map_err(ApiError::internal("Failed to fetch destinations"))
}

async fn destinations_by_region(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<Vec<Destination>>, ApiError> {
    state
        .destinations
        .by_region(&region)
        .map(Json)
        .map_err(ApiError::internal("Failed to fetch destinations by region"))
}

async fn destinations_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Destination>>, ApiError> {
    state
        .destinations
        .by_category(&category)
        .map(Json)
        .map_err(ApiError::internal("Failed to fetch destinations by category"))
}

async fn random_destination(
    State(state): State<AppState>,
    Query(query): Query<RandomQuery>,
) -> Result<Json<Destination>, ApiError> {
    let filter = RegionFilter::from_query(query.region.as_deref());
    pick_with_thread_rng(&state, &filter).map(Json)
}

fn pick_with_thread_rng(state: &AppState, filter: &RegionFilter) -> Result<Destination, ApiError> {
    match pick_random(state.destinations.as_ref(), filter, &mut rand::thread_rng()) {
        Ok(destination) => Ok(destination),
        Err(SelectionError::NotFound { .. }) => Err(ApiError::NotFound {
            message: "No destinations found",
        }),
        Err(SelectionError::Store(source)) => Err(ApiError::Internal {
            message: "Failed to get random destination",
            source,
        }),
    }
}

async fn destination_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Destination>, ApiError> {
    const NOT_FOUND: ApiError = ApiError::NotFound {
        message: "Destination not found",
    };
    let Ok(id) = id.parse::<u64>() else {
        return Err(NOT_FOUND);
    };
    state
        .destinations
        .by_id(id)
        .map_err(ApiError::internal("Failed to fetch destination"))?
        .map(Json)
        .ok_or(NOT_FOUND)
}

async fn record_swipe(
    State(state): State<AppState>,
    payload: Result<Json<NewSwipe>, JsonRejection>,
) -> Result<Json<SwipeEvent>, ApiError> {
    let Json(swipe) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected swipe payload");
        ApiError::Validation {
            message: "Invalid swipe action data",
        }
    })?;
    state
        .swipes
        .record(swipe)
        .map(Json)
        .map_err(ApiError::internal("Failed to record swipe action"))
}

async fn liked_destinations(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<Destination>>, ApiError> {
    state
        .swipes
        .liked(&session_id, state.destinations.as_ref())
        .map(Json)
        .map_err(ApiError::internal("Failed to fetch liked destinations"))
}
