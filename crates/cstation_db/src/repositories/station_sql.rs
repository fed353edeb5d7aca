//! SQL implementation of the station repository

use crate::error::DbError;
use crate::repositories::station::{SaveOutcome, StationRepository};
use crate::DbClient;
use cstation_common::models::Station;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

pub(crate) const STATION_COLUMNS: &str =
    "id, name, address, lat, long, charger_type, phone, email, available";

/// Station columns qualified with the `s` alias, for joins.
pub(crate) const STATION_COLUMNS_PREFIXED: &str =
    "s.id, s.name, s.address, s.lat, s.long, s.charger_type, s.phone, s.email, s.available";

pub(crate) fn station_from_row(row: &AnyRow) -> Result<Station, DbError> {
    Ok(Station {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        address: row.try_get("address")?,
        lat: row.try_get("lat")?,
        long: row.try_get("long")?,
        charger_type: row.try_get("charger_type")?,
        phone: row.try_get("phone")?,
        email: row.try_get("email")?,
        available: row.try_get("available")?,
    })
}

/// SQL implementation of the station repository
#[derive(Debug, Clone)]
pub struct SqlStationRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlStationRepository {
    /// Create a new SQL station repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

impl StationRepository for SqlStationRepository {
    async fn save(&self, station: Station) -> Result<SaveOutcome, DbError> {
        debug!("Saving station: {}", station.id);

        // ON CONFLICT DO NOTHING returns no row when the id is already stored
        let query = format!(
            "INSERT INTO stations ({STATION_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT(id) DO NOTHING \
             RETURNING {STATION_COLUMNS}"
        );

        let inserted = sqlx::query(&query)
            .bind(station.id)
            .bind(&station.name)
            .bind(&station.address)
            .bind(station.lat)
            .bind(station.long)
            .bind(&station.charger_type)
            .bind(station.phone.clone())
            .bind(station.email.clone())
            .bind(station.available)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert station: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        match inserted {
            Some(row) => {
                let station = station_from_row(&row)?;
                info!("Saved new station {}", station.id);
                Ok(SaveOutcome::Created(station))
            }
            None => {
                debug!("Station {} already stored, leaving it unchanged", station.id);
                self.get(station.id).await.map(SaveOutcome::Existing)
            }
        }
    }

    async fn get(&self, id: i64) -> Result<Station, DbError> {
        debug!("Fetching station: {}", id);

        let query = format!("SELECT {STATION_COLUMNS} FROM stations WHERE id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to fetch station: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        match row {
            Some(row) => station_from_row(&row),
            None => Err(DbError::NotFound(format!("No station: {}", id))),
        }
    }

    async fn remove(&self, id: i64) -> Result<(), DbError> {
        debug!("Removing station: {}", id);

        let result = sqlx::query("DELETE FROM stations WHERE id = $1")
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete station: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound(format!("No station: {}", id)));
        }

        info!("Removed station {}", id);
        Ok(())
    }
}
