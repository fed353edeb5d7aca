//! SQL implementation of the user repository

use crate::error::{is_unique_violation, DbError};
use crate::password::{hash_password, verify_password};
use crate::repositories::station_sql::{station_from_row, STATION_COLUMNS_PREFIXED};
use crate::repositories::user::UserRepository;
use crate::sql::sql_for_partial_update;
use crate::DbClient;
use cstation_common::models::{NewUser, Station, User, UserDetails, UserUpdate};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

const USER_COLUMNS: &str = "id, username, first_name, last_name, email, profile_image, is_admin";

/// Client-facing field names that differ from their column.
const USER_FIELD_COLUMNS: &[(&str, &str)] = &[
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("password", "password_hash"),
    ("profile_img", "profile_image"),
];

fn user_from_row(row: &AnyRow) -> Result<User, DbError> {
    let is_admin: i64 = row.try_get("is_admin")?;
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        profile_image: row.try_get("profile_image")?,
        is_admin: is_admin != 0,
    })
}

/// SQL implementation of the user repository
#[derive(Debug, Clone)]
pub struct SqlUserRepository {
    /// The database client
    db_client: DbClient,
    /// bcrypt work factor for new hashes
    bcrypt_cost: u32,
}

impl SqlUserRepository {
    /// Create a new SQL user repository
    pub fn new(db_client: DbClient, bcrypt_cost: u32) -> Self {
        Self {
            db_client,
            bcrypt_cost,
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");

        let row = sqlx::query(&query)
            .bind(username)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find user: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(user_from_row).transpose()
    }
}

impl UserRepository for SqlUserRepository {
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, DbError> {
        debug!("Authenticating user: {}", username);

        let query = format!("SELECT {USER_COLUMNS}, password_hash FROM users WHERE username = $1");
        let row = sqlx::query(&query)
            .bind(username)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to look up credentials: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        let Some(row) = row else {
            return Err(DbError::InvalidCredentials);
        };

        let stored_hash: String = row.try_get("password_hash")?;
        if verify_password(password.to_string(), stored_hash).await? {
            user_from_row(&row)
        } else {
            Err(DbError::InvalidCredentials)
        }
    }

    async fn register(&self, new_user: NewUser) -> Result<User, DbError> {
        debug!("Registering user: {}", new_user.username);

        if self.find_by_username(&new_user.username).await?.is_some() {
            return Err(DbError::DuplicateUsername(new_user.username));
        }

        let password_hash = hash_password(new_user.password, self.bcrypt_cost).await?;

        let query = format!(
            "INSERT INTO users (username, password_hash, first_name, last_name, email, profile_image) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {USER_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(&new_user.username)
            .bind(password_hash)
            .bind(&new_user.first_name)
            .bind(&new_user.last_name)
            .bind(&new_user.email)
            .bind(new_user.profile_image.clone())
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DbError::DuplicateUsername(new_user.username.clone())
                } else {
                    error!("Failed to insert user: {}", e);
                    DbError::QueryError(e.to_string())
                }
            })?;

        let user = user_from_row(&row)?;
        info!("Registered user {} with id {}", user.username, user.id);
        Ok(user)
    }

    async fn get(&self, username: &str) -> Result<UserDetails, DbError> {
        debug!("Fetching user: {}", username);

        let user = self
            .find_by_username(username)
            .await?
            .ok_or_else(|| DbError::NotFound(format!("No user: {}", username)))?;

        let rows = sqlx::query(
            "SELECT f.station_id FROM favorites f \
             JOIN stations s ON s.id = f.station_id \
             WHERE f.user_id = $1 ORDER BY f.id",
        )
        .bind(user.id)
        .fetch_all(self.db_client.pool())
        .await
        .map_err(|e| {
            error!("Failed to load favorites: {}", e);
            DbError::QueryError(e.to_string())
        })?;

        let favorites = rows
            .iter()
            .map(|row| row.try_get::<i64, _>("station_id"))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(UserDetails { user, favorites })
    }

    async fn update(&self, username: &str, update: UserUpdate) -> Result<User, DbError> {
        debug!("Updating user: {}", username);

        if update.username.is_some() {
            return Err(DbError::ImmutableUsername);
        }
        if update.is_empty() {
            return Err(DbError::NoUpdateFields);
        }

        let password_hash = match update.password {
            Some(password) => Some(hash_password(password, self.bcrypt_cost).await?),
            None => None,
        };

        let partial = sql_for_partial_update(
            &[
                ("firstName", update.first_name),
                ("lastName", update.last_name),
                ("password", password_hash),
                ("email", update.email),
                ("profile_img", update.profile_image),
            ],
            USER_FIELD_COLUMNS,
        )?;

        let query = format!(
            "UPDATE users SET {} WHERE username = ${} RETURNING {USER_COLUMNS}",
            partial.set_clause,
            partial.next_placeholder()
        );

        let mut statement = sqlx::query(&query);
        for value in &partial.values {
            statement = statement.bind(value.as_str());
        }

        let row = statement
            .bind(username)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to update user: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        let row = row.ok_or_else(|| DbError::NotFound(format!("No user: {}", username)))?;
        let user = user_from_row(&row)?;
        info!("Updated user {}", user.username);
        Ok(user)
    }

    async fn remove(&self, id: i64) -> Result<(), DbError> {
        debug!("Removing user with id: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete user: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound(format!("No user: {}", id)));
        }

        info!("Removed user with id {}", id);
        Ok(())
    }

    async fn list_favorite_stations(&self, user_id: i64) -> Result<Vec<Station>, DbError> {
        debug!("Listing favorite stations for user id: {}", user_id);

        let query = format!(
            "SELECT {STATION_COLUMNS_PREFIXED} FROM favorites f \
             JOIN stations s ON s.id = f.station_id \
             WHERE f.user_id = $1 ORDER BY f.id"
        );

        let rows = sqlx::query(&query)
            .bind(user_id)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list favorite stations: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(station_from_row).collect()
    }

    async fn username_for_id(&self, id: i64) -> Result<Option<String>, DbError> {
        let row = sqlx::query("SELECT username FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to resolve user id: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        match row {
            Some(row) => Ok(Some(row.try_get("username")?)),
            None => Ok(None),
        }
    }
}
