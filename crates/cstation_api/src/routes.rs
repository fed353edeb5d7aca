use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use cstation_auth::authenticate;
use cstation_common::{not_found, CStationError};
use tracing::info;

use crate::handlers::{auth, reviews, stations, users};
use crate::state::ApiState;

fn auth_routes() -> Router<ApiState> {
    Router::new()
        .route("/auth/token", post(auth::token_handler))
        .route("/auth/register", post(auth::register_handler))
        .route(
            "/auth/favorites/{user_id}",
            get(auth::favorite_stations_handler),
        )
}

fn user_routes() -> Router<ApiState> {
    Router::new()
        // Only DELETE addresses the user by surrogate id; it parses the segment itself.
        .route(
            "/user/{user}",
            get(users::get_user_handler)
                .patch(users::update_user_handler)
                .delete(users::delete_user_handler),
        )
        .route("/user/favorites", post(users::add_favorite_handler))
        .route("/user/delete-favorite", post(users::remove_favorite_handler))
}

fn station_routes() -> Router<ApiState> {
    Router::new()
        .route("/station/newSearch", post(stations::search_handler))
        .route("/station", post(stations::save_station_handler))
        .route(
            "/station/{id}",
            get(stations::get_station_handler).delete(stations::delete_station_handler),
        )
        .route(
            "/station/{id}/reviews",
            get(stations::station_reviews_handler),
        )
}

fn review_routes() -> Router<ApiState> {
    Router::new()
        .route("/review", post(reviews::create_review_handler))
        .route(
            "/review/{id}",
            get(reviews::get_review_handler)
                .patch(reviews::update_review_handler)
                .delete(reviews::delete_review_handler),
        )
}

async fn fallback_handler() -> CStationError {
    not_found("no such route")
}

/// Create the C-Station API router
///
/// Every route, the fallback included, runs behind the authentication
/// middleware, which attaches the caller's identity when the bearer token
/// verifies.
pub fn routes(state: ApiState) -> Router {
    let tokens = state.tokens.clone();

    info!("C-Station routes initialized");

    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(station_routes())
        .merge(review_routes())
        .fallback(fallback_handler)
        .layer(from_fn_with_state(tokens, authenticate))
        .with_state(state)
}
