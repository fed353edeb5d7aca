//! SQL implementation of the review repository

use crate::error::DbError;
use crate::repositories::review::ReviewRepository;
use crate::DbClient;
use cstation_common::models::{NewReview, Review, ReviewUpdate};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

const REVIEW_COLUMNS: &str = "id, user_id, station_id, title, review, rating, r_date, r_time";

fn review_from_row(row: &AnyRow) -> Result<Review, DbError> {
    Ok(Review {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        station_id: row.try_get("station_id")?,
        title: row.try_get("title")?,
        review: row.try_get("review")?,
        rating: row.try_get("rating")?,
        r_date: row.try_get("r_date")?,
        r_time: row.try_get("r_time")?,
    })
}

/// SQL implementation of the review repository
#[derive(Debug, Clone)]
pub struct SqlReviewRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlReviewRepository {
    /// Create a new SQL review repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

impl ReviewRepository for SqlReviewRepository {
    async fn create(&self, review: NewReview) -> Result<Review, DbError> {
        debug!(
            "Creating review by user {} for station {}",
            review.user_id, review.station_id
        );

        let query = format!(
            "INSERT INTO reviews (user_id, station_id, title, review, rating, r_time) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {REVIEW_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(review.user_id)
            .bind(review.station_id)
            .bind(&review.title)
            .bind(&review.review)
            .bind(review.rating)
            .bind(review.r_time.clone())
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert review: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        let created = review_from_row(&row)?;
        info!("Created review {}", created.id);
        Ok(created)
    }

    async fn get(&self, id: i64) -> Result<Review, DbError> {
        debug!("Fetching review: {}", id);

        let query = format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to fetch review: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        match row {
            Some(row) => review_from_row(&row),
            None => Err(DbError::NotFound(format!("No review: {}", id))),
        }
    }

    async fn update(&self, id: i64, update: ReviewUpdate) -> Result<Review, DbError> {
        debug!("Updating review: {}", id);

        let query = format!(
            "UPDATE reviews SET title = $1, review = $2, rating = $3, r_time = $4 \
             WHERE id = $5 \
             RETURNING {REVIEW_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(&update.title)
            .bind(&update.review)
            .bind(update.rating)
            .bind(update.r_time.clone())
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to update review: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        match row {
            Some(row) => review_from_row(&row),
            None => Err(DbError::NotFound(format!("No review: {}", id))),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), DbError> {
        debug!("Deleting review: {}", id);

        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete review: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound(format!("No review: {}", id)));
        }

        info!("Deleted review {}", id);
        Ok(())
    }

    async fn find_all_for_station(&self, station_id: i64) -> Result<Vec<Review>, DbError> {
        debug!("Listing reviews for station: {}", station_id);

        let query = format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE station_id = $1 ORDER BY id"
        );
        let rows = sqlx::query(&query)
            .bind(station_id)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list reviews: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(review_from_row).collect()
    }
}
