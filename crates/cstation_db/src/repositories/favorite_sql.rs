//! SQL implementation of the favorite repository

use crate::error::DbError;
use crate::repositories::favorite::FavoriteRepository;
use crate::DbClient;
use cstation_common::models::Favorite;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

fn favorite_from_row(row: &AnyRow) -> Result<Favorite, DbError> {
    Ok(Favorite {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        station_id: row.try_get("station_id")?,
    })
}

/// SQL implementation of the favorite repository
#[derive(Debug, Clone)]
pub struct SqlFavoriteRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlFavoriteRepository {
    /// Create a new SQL favorite repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

impl FavoriteRepository for SqlFavoriteRepository {
    async fn add(&self, user_id: i64, station_id: i64) -> Result<Favorite, DbError> {
        debug!(
            "Adding favorite for user id: {} and station: {}",
            user_id, station_id
        );

        let mut tx = self.db_client.begin().await?;

        let user = sqlx::query("SELECT id FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DbError::QueryError(e.to_string()))?;
        if user.is_none() {
            return Err(DbError::ForeignKeyViolation(format!("No user: {}", user_id)));
        }

        let station = sqlx::query("SELECT id FROM stations WHERE id = $1")
            .bind(station_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DbError::QueryError(e.to_string()))?;
        if station.is_none() {
            return Err(DbError::ForeignKeyViolation(format!(
                "No station: {}",
                station_id
            )));
        }

        let inserted = sqlx::query(
            "INSERT INTO favorites (user_id, station_id) VALUES ($1, $2) \
             ON CONFLICT(user_id, station_id) DO NOTHING \
             RETURNING id, user_id, station_id",
        )
        .bind(user_id)
        .bind(station_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            error!("Failed to insert favorite: {}", e);
            DbError::QueryError(e.to_string())
        })?;

        let row = match inserted {
            Some(row) => row,
            None => {
                debug!("Favorite already present, returning stored row");
                sqlx::query(
                    "SELECT id, user_id, station_id FROM favorites \
                     WHERE user_id = $1 AND station_id = $2",
                )
                .bind(user_id)
                .bind(station_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| DbError::QueryError(e.to_string()))?
            }
        };
        let favorite = favorite_from_row(&row)?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionError(e.to_string()))?;

        info!("Favorite {} links user {} to station {}", favorite.id, user_id, station_id);
        Ok(favorite)
    }

    async fn get(&self, user_id: i64, station_id: i64) -> Result<Favorite, DbError> {
        debug!(
            "Finding favorite for user id: {} and station: {}",
            user_id, station_id
        );

        let row = sqlx::query(
            "SELECT id, user_id, station_id FROM favorites \
             WHERE user_id = $1 AND station_id = $2",
        )
        .bind(user_id)
        .bind(station_id)
        .fetch_optional(self.db_client.pool())
        .await
        .map_err(|e| {
            error!("Failed to find favorite: {}", e);
            DbError::QueryError(e.to_string())
        })?;

        match row {
            Some(row) => favorite_from_row(&row),
            None => Err(DbError::NotFound(format!(
                "No favorite for user {} and station {}",
                user_id, station_id
            ))),
        }
    }

    async fn delete(&self, favorite_id: i64) -> Result<(), DbError> {
        debug!("Deleting favorite: {}", favorite_id);

        let result = sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(favorite_id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete favorite: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound(format!("No favorite: {}", favorite_id)));
        }

        Ok(())
    }

    async fn remove_pair(&self, user_id: i64, station_id: i64) -> Result<Favorite, DbError> {
        debug!(
            "Removing favorite for user id: {} and station: {}",
            user_id, station_id
        );

        let row = sqlx::query(
            "DELETE FROM favorites WHERE user_id = $1 AND station_id = $2 \
             RETURNING id, user_id, station_id",
        )
        .bind(user_id)
        .bind(station_id)
        .fetch_optional(self.db_client.pool())
        .await
        .map_err(|e| {
            error!("Failed to remove favorite: {}", e);
            DbError::QueryError(e.to_string())
        })?;

        match row {
            Some(row) => {
                let favorite = favorite_from_row(&row)?;
                info!("Removed favorite {}", favorite.id);
                Ok(favorite)
            }
            None => Err(DbError::NotFound(format!(
                "No favorite for user {} and station {}",
                user_id, station_id
            ))),
        }
    }
}
