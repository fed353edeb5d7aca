// File: services/cstation_backend/src/app.rs
use axum::{routing::get, Router};
use cstation_api::ApiState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const WELCOME_MESSAGE: &str = "Welcome to the C-Station API!";

/// Full application router: welcome route, API routes, optional Swagger UI.
pub fn build_app(state: ApiState) -> Router {
    #[allow(unused_mut)] // mutated only with the openapi feature
    let mut app = Router::new()
        .route("/", get(|| async { WELCOME_MESSAGE }))
        .merge(cstation_api::routes(state));

    #[cfg(feature = "openapi")]
    {
        use cstation_api::doc::CStationApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "C-Station API",
                version = "0.1.0",
                description = "EV charging station lookup, favorites and reviews",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers((url = "/", description = "API root")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(CStationApiDoc::openapi());
        info!("Adding Swagger UI at /docs");

        app = app.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", openapi_doc));
    }

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use cstation_chargers::OpenChargeMapClient;
    use cstation_config::AppConfig;
    use cstation_db::{init_schema, DbClient};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn app() -> Router {
        let config = AppConfig::default();
        let db_client = DbClient::from_url("sqlite::memory:").await.unwrap();
        init_schema(&db_client).await.unwrap();
        let chargers = Arc::new(OpenChargeMapClient::new(&config.open_charge_map).unwrap());
        build_app(ApiState::new(db_client, &config, chargers))
    }

    #[tokio::test]
    async fn root_greets() {
        let response = app()
            .await
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], WELCOME_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn api_routes_are_mounted_at_the_root() {
        let response = app()
            .await
            .oneshot(Request::get("/station/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[cfg(feature = "openapi")]
    #[tokio::test]
    async fn serves_the_openapi_document() {
        let response = app()
            .await
            .oneshot(
                Request::get("/docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(doc["paths"]["/user/favorites"].is_object());
    }
}
