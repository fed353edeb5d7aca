//! `/station` handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cstation_auth::Caller;
use cstation_chargers::SearchRequest;
use cstation_common::models::{Review, Station};
use cstation_common::CStationError;
use cstation_db::{ReviewRepository, StationRepository};
use serde::Serialize;

use super::DeletedResponse;
use crate::extract::JsonBody;
use crate::state::ApiState;
use crate::validation::{validate_search, validate_station};

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SearchResponse {
    /// Raw Open Charge Map POI objects.
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<Object>))]
    pub stations: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StationResponse {
    pub station: Station,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
}

/// `POST /station/newSearch`: open to anonymous callers.
pub async fn search_handler(
    State(state): State<ApiState>,
    JsonBody(request): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, CStationError> {
    validate_search(&request)?;

    let stations = state.chargers.search(&request).await?;
    Ok(Json(SearchResponse { stations }))
}

/// `POST /station`: 201 when stored, 200 when the id already existed.
pub async fn save_station_handler(
    State(state): State<ApiState>,
    caller: Caller,
    body: Result<JsonBody<Station>, CStationError>,
) -> Result<(StatusCode, Json<StationResponse>), CStationError> {
    caller.require_logged_in()?;

    let JsonBody(station) = body?;
    validate_station(&station)?;

    let outcome = state.stations.save(station).await?;
    let status = if outcome.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(StationResponse {
            station: outcome.into_station(),
        }),
    ))
}

/// `GET /station/{id}`
pub async fn get_station_handler(
    State(state): State<ApiState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<Json<StationResponse>, CStationError> {
    caller.require_logged_in()?;

    let station = state.stations.get(id).await?;
    Ok(Json(StationResponse { station }))
}

/// `DELETE /station/{id}`
pub async fn delete_station_handler(
    State(state): State<ApiState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, CStationError> {
    caller.require_logged_in()?;

    state.stations.remove(id).await?;
    Ok(Json(DeletedResponse { deleted: id }))
}

/// `GET /station/{id}/reviews`
pub async fn station_reviews_handler(
    State(state): State<ApiState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<Json<ReviewsResponse>, CStationError> {
    caller.require_logged_in()?;

    let reviews = state.reviews.find_all_for_station(id).await?;
    Ok(Json(ReviewsResponse { reviews }))
}
