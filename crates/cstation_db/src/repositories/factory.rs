//! Factory for the SQL repositories

use crate::repositories::{
    SqlFavoriteRepository, SqlReviewRepository, SqlStationRepository, SqlUserRepository,
};
use crate::{DbClient, RepositoryFactory};

/// Builds every SQL repository from one shared [`DbClient`].
#[derive(Debug, Clone)]
pub struct SqlRepositoryFactory {
    /// bcrypt work factor handed to the user repository
    bcrypt_cost: u32,
}

impl SqlRepositoryFactory {
    pub fn new(bcrypt_cost: u32) -> Self {
        Self { bcrypt_cost }
    }
}

impl RepositoryFactory<SqlUserRepository, DbClient> for SqlRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlUserRepository {
        SqlUserRepository::new(db_client, self.bcrypt_cost)
    }
}

impl RepositoryFactory<SqlStationRepository, DbClient> for SqlRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlStationRepository {
        SqlStationRepository::new(db_client)
    }
}

impl RepositoryFactory<SqlFavoriteRepository, DbClient> for SqlRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlFavoriteRepository {
        SqlFavoriteRepository::new(db_client)
    }
}

impl RepositoryFactory<SqlReviewRepository, DbClient> for SqlRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlReviewRepository {
        SqlReviewRepository::new(db_client)
    }
}
