//! Database integration for the C-Station backend
//!
//! A thin `DbClient` over an sqlx `Any` pool plus one repository per stored
//! entity. Each repository is a trait with a SQL implementation so the API
//! layer depends on behaviour, not on the storage engine.
//!
//! # Example
//!
//! ```rust,no_run
//! use cstation_config::DatabaseConfig;
//! use cstation_db::{init_schema, DbClient, SqlStationRepository, StationRepository};
//!
//! async fn lookup() -> Result<(), Box<dyn std::error::Error>> {
//!     let db_client = DbClient::from_config(&DatabaseConfig::default()).await?;
//!     init_schema(&db_client).await?;
//!     let stations = SqlStationRepository::new(db_client);
//!     let station = stations.get(123).await?;
//!     println!("{}", station.name);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod password;
pub mod repositories;
pub mod repository;
pub mod schema;
pub mod sql;

// Re-export the client, factory, and repository traits for ease of use
pub use client::{DbClient, DbTransaction};
pub use error::DbError;
pub use repository::RepositoryFactory;
pub use schema::init_schema;

// Re-export the repositories module components for ease of use
pub use repositories::{
    FavoriteRepository, ReviewRepository, SaveOutcome, SqlFavoriteRepository,
    SqlRepositoryFactory, SqlReviewRepository, SqlStationRepository, SqlUserRepository,
    StationRepository, UserRepository,
};
