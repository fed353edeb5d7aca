//! Repository for users
//!
//! Owns the credential store and the username uniqueness rule.

use crate::error::DbError;
use cstation_common::models::{NewUser, Station, User, UserDetails, UserUpdate};

/// Repository for users
pub trait UserRepository {
    /// Verifies a username/password pair.
    ///
    /// An unknown username and a wrong password both fail with
    /// [`DbError::InvalidCredentials`].
    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<User, DbError>> + Send;

    /// Creates a user with a hashed password.
    ///
    /// Fails with [`DbError::DuplicateUsername`] if the username is taken.
    fn register(
        &self,
        new_user: NewUser,
    ) -> impl std::future::Future<Output = Result<User, DbError>> + Send;

    /// Fetches a user together with the ids of their favorite stations.
    fn get(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<UserDetails, DbError>> + Send;

    /// Writes only the supplied fields; a new password is re-hashed.
    ///
    /// A `username` in the update fails with [`DbError::ImmutableUsername`].
    fn update(
        &self,
        username: &str,
        update: UserUpdate,
    ) -> impl std::future::Future<Output = Result<User, DbError>> + Send;

    /// Deletes a user by surrogate id. Favorites and reviews are kept.
    fn remove(&self, id: i64) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Full station records the user has favorited, oldest favorite first.
    fn list_favorite_stations(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Station>, DbError>> + Send;

    /// Resolves a surrogate id to its username, if the user exists.
    fn username_for_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<String>, DbError>> + Send;
}
