// File: services/cstation_backend/src/main.rs
use cstation_chargers::OpenChargeMapClient;
use cstation_config::load_config;
use cstation_db::{init_schema, DbClient};
use cstation_api::ApiState;
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

mod app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    cstation_common::logging::init();

    let config = load_config()?;

    let db_client = DbClient::from_config(&config.database).await?;
    init_schema(&db_client).await?;

    let chargers = Arc::new(OpenChargeMapClient::new(&config.open_charge_map)?);
    let state = ApiState::new(db_client, &config, chargers);
    let app = app::build_app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
