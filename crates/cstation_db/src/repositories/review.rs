//! Repository for reviews

use crate::error::DbError;
use cstation_common::models::{NewReview, Review, ReviewUpdate};

/// Repository for reviews
pub trait ReviewRepository {
    /// Stores a review; `r_date` is assigned by the store.
    fn create(
        &self,
        review: NewReview,
    ) -> impl std::future::Future<Output = Result<Review, DbError>> + Send;

    fn get(&self, id: i64) -> impl std::future::Future<Output = Result<Review, DbError>> + Send;

    /// Replaces title, review, rating and r_time.
    fn update(
        &self,
        id: i64,
        update: ReviewUpdate,
    ) -> impl std::future::Future<Output = Result<Review, DbError>> + Send;

    fn delete(&self, id: i64) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// All reviews of one station, oldest first.
    fn find_all_for_station(
        &self,
        station_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Review>, DbError>> + Send;
}
