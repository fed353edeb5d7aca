//! `/auth` handlers: token issue, registration and the favorites listing.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cstation_auth::Caller;
use cstation_common::models::{NewUser, Station, User};
use cstation_common::CStationError;
use cstation_db::UserRepository;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use super::require_same_user_id;
use crate::extract::JsonBody;
use crate::state::ApiState;
use crate::validation::{validate_new_user, validate_token_request};

/// Request body for `POST /auth/token`
#[derive(Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RegisterResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FavoriteStationsResponse {
    pub result: Vec<Station>,
}

/// `POST /auth/token`: `{username, password}` to `{token}`.
pub async fn token_handler(
    State(state): State<ApiState>,
    JsonBody(request): JsonBody<TokenRequest>,
) -> Result<Json<TokenResponse>, CStationError> {
    validate_token_request(&request)?;

    let user = state
        .users
        .authenticate(&request.username, &request.password)
        .await?;
    let token = state.tokens.issue(&user)?;

    Ok(Json(TokenResponse { token }))
}

/// `POST /auth/register`: creates the user and logs them in.
pub async fn register_handler(
    State(state): State<ApiState>,
    JsonBody(new_user): JsonBody<NewUser>,
) -> Result<(StatusCode, Json<RegisterResponse>), CStationError> {
    validate_new_user(&new_user)?;

    let user = state.users.register(new_user).await?;
    let token = state.tokens.issue(&user)?;
    info!("User {} registered", user.username);

    Ok((StatusCode::CREATED, Json(RegisterResponse { token, user })))
}

/// `GET /auth/favorites/{user_id}`: full records of the user's favorite stations.
pub async fn favorite_stations_handler(
    State(state): State<ApiState>,
    caller: Caller,
    Path(user_id): Path<i64>,
) -> Result<Json<FavoriteStationsResponse>, CStationError> {
    require_same_user_id(&state, &caller, user_id).await?;

    let result = state.users.list_favorite_stations(user_id).await?;
    Ok(Json(FavoriteStationsResponse { result }))
}
