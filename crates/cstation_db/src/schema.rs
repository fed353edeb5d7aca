//! Schema bootstrap
//!
//! Columns only use INTEGER, REAL and TEXT so every value decodes through the
//! `Any` driver. References between tables are soft: deleting a user or a
//! station leaves its favorites and reviews in place.

use crate::client::DbClient;
use crate::error::DbError;
use tracing::{debug, info};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL,
        profile_image TEXT,
        is_admin INTEGER NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS stations (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        address TEXT NOT NULL,
        lat REAL NOT NULL,
        long REAL NOT NULL,
        charger_type TEXT NOT NULL,
        phone TEXT,
        email TEXT,
        available INTEGER NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS favorites (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        station_id INTEGER NOT NULL,
        UNIQUE(user_id, station_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS reviews (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        station_id INTEGER NOT NULL,
        title TEXT NOT NULL,
        review TEXT NOT NULL,
        rating INTEGER NOT NULL,
        r_date TEXT DEFAULT CURRENT_TIMESTAMP,
        r_time TEXT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_reviews_station_id ON reviews(station_id)",
];

/// Creates every table the repositories use, if missing.
pub async fn init_schema(db_client: &DbClient) -> Result<(), DbError> {
    debug!("Initializing schema");

    for statement in SCHEMA {
        db_client.execute(statement).await?;
    }

    info!("Schema initialized successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn schema_init_is_repeatable() {
        let client = DbClient::from_url("sqlite::memory:").await.unwrap();
        init_schema(&client).await.unwrap();
        init_schema(&client).await.unwrap();

        let affected = client
            .execute("INSERT INTO favorites (user_id, station_id) VALUES (1, 2)")
            .await
            .unwrap();
        assert_eq!(affected, 1);
    }
}
