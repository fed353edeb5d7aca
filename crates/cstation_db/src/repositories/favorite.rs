//! Repository for favorites
//!
//! A favorite is an edge row between a user and a station with its own
//! surrogate id. Adding is idempotent per pair; removal can go through the
//! surrogate id (`get` then `delete`) or the pair in a single statement.

use crate::error::DbError;
use cstation_common::models::Favorite;

/// Repository for favorites
pub trait FavoriteRepository {
    /// Links a user to a station.
    ///
    /// Both ends must exist, otherwise [`DbError::ForeignKeyViolation`].
    /// Adding an existing pair returns the stored row instead of a duplicate.
    fn add(
        &self,
        user_id: i64,
        station_id: i64,
    ) -> impl std::future::Future<Output = Result<Favorite, DbError>> + Send;

    /// Resolves the favorite row for a pair.
    fn get(
        &self,
        user_id: i64,
        station_id: i64,
    ) -> impl std::future::Future<Output = Result<Favorite, DbError>> + Send;

    /// Deletes a favorite by surrogate id.
    fn delete(
        &self,
        favorite_id: i64,
    ) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Deletes the favorite for a pair in one statement and returns it.
    fn remove_pair(
        &self,
        user_id: i64,
        station_id: i64,
    ) -> impl std::future::Future<Output = Result<Favorite, DbError>> + Send;
}
