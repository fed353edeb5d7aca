//! `/user` handlers. Every route requires the caller to be the target user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cstation_auth::Caller;
use cstation_common::models::{Favorite, Station, User, UserDetails, UserUpdate};
use cstation_common::{validation_error, CStationError};
use cstation_db::{FavoriteRepository, StationRepository, UserRepository};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{require_same_user_id, require_same_username, DeletedResponse};
use crate::extract::JsonBody;
use crate::state::ApiState;
use crate::validation::{validate_station, validate_user_update};

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserDetailsResponse {
    pub user: UserDetails,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    pub user: User,
}

/// Body of `POST /user/favorites`: the owner plus the station to bookmark.
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AddFavoriteRequest {
    pub user_id: i64,
    #[serde(flatten)]
    pub station: Station,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FavoriteResponse {
    pub favorite: Favorite,
}

#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RemoveFavoriteRequest {
    pub user_id: i64,
    pub station_id: i64,
}

/// `GET /user/{username}`
pub async fn get_user_handler(
    State(state): State<ApiState>,
    caller: Caller,
    Path(username): Path<String>,
) -> Result<Json<UserDetailsResponse>, CStationError> {
    require_same_username(&state, &caller, &username).await?;

    let user = state.users.get(&username).await?;
    Ok(Json(UserDetailsResponse { user }))
}

/// `PATCH /user/{username}`
///
/// Authorization is checked before the body is looked at.
pub async fn update_user_handler(
    State(state): State<ApiState>,
    caller: Caller,
    Path(username): Path<String>,
    body: Result<JsonBody<UserUpdate>, CStationError>,
) -> Result<Json<UserResponse>, CStationError> {
    require_same_username(&state, &caller, &username).await?;

    let JsonBody(update) = body?;
    validate_user_update(&update)?;

    let user = state.users.update(&username, update).await?;
    Ok(Json(UserResponse { user }))
}

/// `DELETE /user/{id}`
pub async fn delete_user_handler(
    State(state): State<ApiState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, CStationError> {
    caller.require_logged_in()?;
    let id: i64 = id
        .parse()
        .map_err(|_| validation_error("user id must be an integer"))?;
    require_same_user_id(&state, &caller, id).await?;

    state.users.remove(id).await?;
    info!("User {} deleted", id);
    Ok(Json(DeletedResponse { deleted: id }))
}

/// `POST /user/favorites`
///
/// Saves the station (a no-op if it is already stored) and then links it.
/// The link is not attempted when the save fails.
pub async fn add_favorite_handler(
    State(state): State<ApiState>,
    caller: Caller,
    body: Result<JsonBody<AddFavoriteRequest>, CStationError>,
) -> Result<(StatusCode, Json<FavoriteResponse>), CStationError> {
    caller.require_logged_in()?;

    let JsonBody(request) = body?;
    require_same_user_id(&state, &caller, request.user_id).await?;
    validate_station(&request.station)?;

    let station = state.stations.save(request.station).await?.into_station();
    let favorite = state.favorites.add(request.user_id, station.id).await?;

    Ok((StatusCode::CREATED, Json(FavoriteResponse { favorite })))
}

/// `POST /user/delete-favorite`
pub async fn remove_favorite_handler(
    State(state): State<ApiState>,
    caller: Caller,
    body: Result<JsonBody<RemoveFavoriteRequest>, CStationError>,
) -> Result<Json<FavoriteResponse>, CStationError> {
    caller.require_logged_in()?;

    let JsonBody(request) = body?;
    require_same_user_id(&state, &caller, request.user_id).await?;

    let favorite = state
        .favorites
        .remove_pair(request.user_id, request.station_id)
        .await?;
    Ok(Json(FavoriteResponse { favorite }))
}
