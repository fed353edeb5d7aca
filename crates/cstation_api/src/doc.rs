#![allow(dead_code)]
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers::auth::{
    FavoriteStationsResponse, RegisterResponse, TokenRequest, TokenResponse,
};
use crate::handlers::reviews::ReviewResponse;
use crate::handlers::stations::{ReviewsResponse, SearchResponse, StationResponse};
use crate::handlers::users::{
    AddFavoriteRequest, FavoriteResponse, RemoveFavoriteRequest, UserDetailsResponse,
    UserResponse,
};
use crate::handlers::DeletedResponse;
use cstation_chargers::SearchRequest;
use cstation_common::models::{
    Favorite, NewReview, NewUser, Review, ReviewUpdate, Station, User, UserDetails, UserUpdate,
};

#[utoipa::path(
    post,
    path = "/auth/token",
    request_body(content = TokenRequest, example = json!({
        "username": "u1",
        "password": "password1"
    })),
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Malformed request"),
        (status = 401, description = "Invalid username/password")
    ),
    tag = "Auth"
)]
fn doc_token_handler() {}

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body(content = NewUser, example = json!({
        "username": "u1",
        "password": "password1",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com"
    })),
    responses(
        (status = 201, description = "User registered and logged in", body = RegisterResponse),
        (status = 400, description = "Invalid payload or duplicate username")
    ),
    tag = "Auth"
)]
fn doc_register_handler() {}

#[utoipa::path(
    get,
    path = "/auth/favorites/{user_id}",
    params(("user_id" = i64, Path, description = "User surrogate id")),
    responses(
        (status = 200, description = "Favorite stations", body = FavoriteStationsResponse),
        (status = 401, description = "Not the same user")
    ),
    security(("bearer" = [])),
    tag = "Auth"
)]
fn doc_favorite_stations_handler() {}

#[utoipa::path(
    get,
    path = "/user/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User with favorite station ids", body = UserDetailsResponse),
        (status = 401, description = "Not the same user"),
        (status = 404, description = "No such user")
    ),
    security(("bearer" = [])),
    tag = "User"
)]
fn doc_get_user_handler() {}

#[utoipa::path(
    patch,
    path = "/user/{username}",
    params(("username" = String, Path, description = "Username")),
    request_body(content = UserUpdate, example = json!({"firstName": "New"})),
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Not the same user"),
        (status = 404, description = "No such user")
    ),
    security(("bearer" = [])),
    tag = "User"
)]
fn doc_update_user_handler() {}

#[utoipa::path(
    delete,
    path = "/user/{id}",
    params(("id" = i64, Path, description = "User surrogate id")),
    responses(
        (status = 200, description = "User deleted", body = DeletedResponse),
        (status = 401, description = "Not the same user"),
        (status = 404, description = "No such user")
    ),
    security(("bearer" = [])),
    tag = "User"
)]
fn doc_delete_user_handler() {}

#[utoipa::path(
    post,
    path = "/user/favorites",
    request_body(content = AddFavoriteRequest),
    responses(
        (status = 201, description = "Station saved and favorited", body = FavoriteResponse),
        (status = 401, description = "Not the same user"),
        (status = 404, description = "User or station missing")
    ),
    security(("bearer" = [])),
    tag = "User"
)]
fn doc_add_favorite_handler() {}

#[utoipa::path(
    post,
    path = "/user/delete-favorite",
    request_body(content = RemoveFavoriteRequest, example = json!({"user_id": 1, "station_id": 123})),
    responses(
        (status = 200, description = "Favorite removed", body = FavoriteResponse),
        (status = 401, description = "Not the same user"),
        (status = 404, description = "No such favorite")
    ),
    security(("bearer" = [])),
    tag = "User"
)]
fn doc_remove_favorite_handler() {}

#[utoipa::path(
    post,
    path = "/station/newSearch",
    request_body(content = SearchRequest, example = json!({
        "lat": 37.7749,
        "lng": -122.4194,
        "maxResult": 10,
        "charger_type": 25
    })),
    responses(
        (status = 200, description = "Raw charger candidates", body = SearchResponse),
        (status = 400, description = "Invalid search"),
        (status = 502, description = "Charger API failed")
    ),
    tag = "Station"
)]
fn doc_search_handler() {}

#[utoipa::path(
    post,
    path = "/station",
    request_body(content = Station),
    responses(
        (status = 201, description = "Station stored", body = StationResponse),
        (status = 200, description = "Station already stored, unchanged", body = StationResponse),
        (status = 401, description = "Not logged in")
    ),
    security(("bearer" = [])),
    tag = "Station"
)]
fn doc_save_station_handler() {}

#[utoipa::path(
    get,
    path = "/station/{id}",
    params(("id" = i64, Path, description = "Station id")),
    responses(
        (status = 200, description = "Station", body = StationResponse),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "No such station")
    ),
    security(("bearer" = [])),
    tag = "Station"
)]
fn doc_get_station_handler() {}

#[utoipa::path(
    delete,
    path = "/station/{id}",
    params(("id" = i64, Path, description = "Station id")),
    responses(
        (status = 200, description = "Station deleted", body = DeletedResponse),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "No such station")
    ),
    security(("bearer" = [])),
    tag = "Station"
)]
fn doc_delete_station_handler() {}

#[utoipa::path(
    get,
    path = "/station/{id}/reviews",
    params(("id" = i64, Path, description = "Station id")),
    responses(
        (status = 200, description = "Reviews of the station", body = ReviewsResponse),
        (status = 401, description = "Not logged in")
    ),
    security(("bearer" = [])),
    tag = "Station"
)]
fn doc_station_reviews_handler() {}

#[utoipa::path(
    post,
    path = "/review",
    request_body(content = NewReview),
    responses(
        (status = 201, description = "Review created", body = ReviewResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Not the author")
    ),
    security(("bearer" = [])),
    tag = "Review"
)]
fn doc_create_review_handler() {}

#[utoipa::path(
    get,
    path = "/review/{id}",
    params(("id" = i64, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review", body = ReviewResponse),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "No such review")
    ),
    security(("bearer" = [])),
    tag = "Review"
)]
fn doc_get_review_handler() {}

#[utoipa::path(
    patch,
    path = "/review/{id}",
    params(("id" = i64, Path, description = "Review id")),
    request_body(content = ReviewUpdate),
    responses(
        (status = 200, description = "Review replaced", body = ReviewResponse),
        (status = 401, description = "Not the author"),
        (status = 404, description = "No such review")
    ),
    security(("bearer" = [])),
    tag = "Review"
)]
fn doc_update_review_handler() {}

#[utoipa::path(
    delete,
    path = "/review/{id}",
    params(("id" = i64, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review deleted", body = DeletedResponse),
        (status = 401, description = "Not the author"),
        (status = 404, description = "No such review")
    ),
    security(("bearer" = [])),
    tag = "Review"
)]
fn doc_delete_review_handler() {}

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_token_handler,
        doc_register_handler,
        doc_favorite_stations_handler,
        doc_get_user_handler,
        doc_update_user_handler,
        doc_delete_user_handler,
        doc_add_favorite_handler,
        doc_remove_favorite_handler,
        doc_search_handler,
        doc_save_station_handler,
        doc_get_station_handler,
        doc_delete_station_handler,
        doc_station_reviews_handler,
        doc_create_review_handler,
        doc_get_review_handler,
        doc_update_review_handler,
        doc_delete_review_handler
    ),
    components(schemas(
        TokenRequest,
        TokenResponse,
        RegisterResponse,
        FavoriteStationsResponse,
        UserDetailsResponse,
        UserResponse,
        AddFavoriteRequest,
        RemoveFavoriteRequest,
        FavoriteResponse,
        SearchRequest,
        SearchResponse,
        StationResponse,
        ReviewsResponse,
        ReviewResponse,
        DeletedResponse,
        User,
        UserDetails,
        NewUser,
        UserUpdate,
        Station,
        Favorite,
        Review,
        NewReview,
        ReviewUpdate
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "Auth", description = "Tokens and registration"),
        (name = "User", description = "Own account and favorites"),
        (name = "Station", description = "Charging stations and charger search"),
        (name = "Review", description = "Station reviews")
    )
)]
pub struct CStationApiDoc;
