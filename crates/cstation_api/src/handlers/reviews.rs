//! `/review` handlers.
//!
//! Reading needs a login; writing needs the caller to be the author.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cstation_auth::Caller;
use cstation_common::models::{NewReview, Review, ReviewUpdate};
use cstation_common::CStationError;
use cstation_db::ReviewRepository;
use serde::Serialize;

use super::{require_same_user_id, DeletedResponse};
use crate::extract::JsonBody;
use crate::state::ApiState;
use crate::validation::{validate_new_review, validate_review_update};

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReviewResponse {
    pub review: Review,
}

/// `POST /review`: the review's `user_id` must be the caller.
pub async fn create_review_handler(
    State(state): State<ApiState>,
    caller: Caller,
    body: Result<JsonBody<NewReview>, CStationError>,
) -> Result<(StatusCode, Json<ReviewResponse>), CStationError> {
    caller.require_logged_in()?;

    let JsonBody(new_review) = body?;
    require_same_user_id(&state, &caller, new_review.user_id).await?;
    validate_new_review(&new_review)?;

    let review = state.reviews.create(new_review).await?;
    Ok((StatusCode::CREATED, Json(ReviewResponse { review })))
}

/// `GET /review/{id}`
pub async fn get_review_handler(
    State(state): State<ApiState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<Json<ReviewResponse>, CStationError> {
    caller.require_logged_in()?;

    let review = state.reviews.get(id).await?;
    Ok(Json(ReviewResponse { review }))
}

/// `PATCH /review/{id}`: replaces title, review, rating and r_time.
pub async fn update_review_handler(
    State(state): State<ApiState>,
    caller: Caller,
    Path(id): Path<i64>,
    body: Result<JsonBody<ReviewUpdate>, CStationError>,
) -> Result<Json<ReviewResponse>, CStationError> {
    caller.require_logged_in()?;

    let existing = state.reviews.get(id).await?;
    require_same_user_id(&state, &caller, existing.user_id).await?;

    let JsonBody(update) = body?;
    validate_review_update(&update)?;

    let review = state.reviews.update(id, update).await?;
    Ok(Json(ReviewResponse { review }))
}

/// `DELETE /review/{id}`
pub async fn delete_review_handler(
    State(state): State<ApiState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, CStationError> {
    caller.require_logged_in()?;

    let existing = state.reviews.get(id).await?;
    require_same_user_id(&state, &caller, existing.user_id).await?;

    state.reviews.delete(id).await?;
    Ok(Json(DeletedResponse { deleted: id }))
}
