// --- File: crates/cstation_common/src/models.rs ---
//! Domain records shared by the storage, auth and API crates.
//!
//! User payloads use camelCase on the wire (`firstName`, `lastName`) and also
//! accept the snake_case spellings. Station and review payloads use the column
//! names directly.

use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A user record as returned to clients. Never carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub is_admin: bool,
}

/// A user enriched with the ids of the stations they favorited.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UserDetails {
    #[serde(flatten)]
    pub user: User,
    pub favorites: Vec<i64>,
}

/// Registration payload.
#[derive(Deserialize, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    #[serde(alias = "first_name")]
    pub first_name: String,
    #[serde(alias = "last_name")]
    pub last_name: String,
    pub email: String,
    #[serde(default, alias = "profile_image", alias = "profile_img")]
    pub profile_image: Option<String>,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"***")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("profile_image", &self.profile_image)
            .finish()
    }
}

/// Partial user update. Only the fields present are written.
#[derive(Deserialize, Clone, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    /// Accepted only so a rename attempt can be refused; usernames never change.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, alias = "first_name")]
    pub first_name: Option<String>,
    #[serde(default, alias = "last_name")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "profile_image", alias = "profile_img")]
    pub profile_image: Option<String>,
}

impl UserUpdate {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.password.is_none()
            && self.email.is_none()
            && self.profile_image.is_none()
    }
}

impl fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserUpdate")
            .field("username", &self.username)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("email", &self.email)
            .field("profile_image", &self.profile_image)
            .finish()
    }
}

/// A charging station. The id comes from the charger lookup, not the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Station {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub long: f64,
    pub charger_type: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub available: i64,
}

/// A user-to-station bookmark.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub station_id: i64,
}

/// A review left by a user on a station.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub station_id: i64,
    pub title: String,
    pub review: String,
    pub rating: i64,
    /// Set by the store when the review is created.
    pub r_date: Option<String>,
    pub r_time: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct NewReview {
    pub user_id: i64,
    pub station_id: i64,
    pub title: String,
    pub review: String,
    pub rating: i64,
    #[serde(default)]
    pub r_time: Option<String>,
}

/// Full replacement of a review's mutable fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ReviewUpdate {
    pub title: String,
    pub review: String,
    pub rating: i64,
    #[serde(default)]
    pub r_time: Option<String>,
}
