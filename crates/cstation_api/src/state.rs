use cstation_auth::TokenService;
use cstation_chargers::ChargerLookup;
use cstation_config::AppConfig;
use cstation_db::{
    DbClient, RepositoryFactory, SqlFavoriteRepository, SqlRepositoryFactory,
    SqlReviewRepository, SqlStationRepository, SqlUserRepository,
};
use std::sync::Arc;

/// Shared state for every handler
///
/// All handles are built once at startup and injected here; nothing is
/// process-global.
#[derive(Clone)]
pub struct ApiState {
    pub users: SqlUserRepository,
    pub stations: SqlStationRepository,
    pub favorites: SqlFavoriteRepository,
    pub reviews: SqlReviewRepository,
    pub tokens: Arc<TokenService>,
    pub chargers: Arc<dyn ChargerLookup>,
}

impl ApiState {
    pub fn new(db_client: DbClient, config: &AppConfig, chargers: Arc<dyn ChargerLookup>) -> Self {
        let factory = SqlRepositoryFactory::new(config.auth.bcrypt_cost);
        Self {
            users: factory.create_repository(db_client.clone()),
            stations: factory.create_repository(db_client.clone()),
            favorites: factory.create_repository(db_client.clone()),
            reviews: factory.create_repository(db_client),
            tokens: Arc::new(TokenService::from_config(&config.auth)),
            chargers,
        }
    }
}
