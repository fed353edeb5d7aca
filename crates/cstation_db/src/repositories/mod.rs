//! Repository modules for database access
//!
//! One trait per entity plus its SQL implementation.

pub mod factory;
pub mod favorite;
pub mod favorite_sql;
pub mod review;
pub mod review_sql;
pub mod station;
pub mod station_sql;
pub mod user;
pub mod user_sql;

// Re-export the repositories and factory for ease of use
pub use factory::SqlRepositoryFactory;
pub use favorite::FavoriteRepository;
pub use favorite_sql::SqlFavoriteRepository;
pub use review::ReviewRepository;
pub use review_sql::SqlReviewRepository;
pub use station::{SaveOutcome, StationRepository};
pub use station_sql::SqlStationRepository;
pub use user::UserRepository;
pub use user_sql::SqlUserRepository;
