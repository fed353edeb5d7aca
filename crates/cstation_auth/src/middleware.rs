//! Authorization middleware
//!
//! Install with `axum::middleware::from_fn_with_state(tokens, authenticate)`.

use crate::identity::Identity;
use crate::tokens::TokenService;
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use tracing::debug;

/// Verifies the bearer token, if any, and attaches the [`Identity`].
///
/// Missing or invalid tokens leave the request anonymous; the route guards
/// decide whether that is acceptable.
pub async fn authenticate(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Response {
    let identity = bearer_token(request.headers()).and_then(|token| {
        tokens
            .verify(token)
            .map_err(|e| debug!("Proceeding anonymously: {}", e))
            .ok()
    });

    if let Some(claims) = identity {
        request.extensions_mut().insert(Identity::from(claims));
    }

    next.run(request).await
}

/// Extracts the token from `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))?
        .trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Caller;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use cstation_common::models::User;
    use tower::ServiceExt;

    async fn whoami(caller: Caller) -> String {
        caller
            .identity()
            .map_or_else(|| "anonymous".to_string(), |i| i.username.clone())
    }

    fn app(tokens: Arc<TokenService>) -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .layer(axum::middleware::from_fn_with_state(tokens, authenticate))
    }

    async fn call(app: Router, authorization: Option<String>) -> String {
        let mut builder = HttpRequest::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let response = app
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn token_for(tokens: &TokenService, username: &str) -> String {
        tokens
            .issue(&User {
                id: 1,
                username: username.to_string(),
                first_name: "F".to_string(),
                last_name: "L".to_string(),
                email: "e@example.com".to_string(),
                profile_image: None,
                is_admin: false,
            })
            .unwrap()
    }

    #[tokio::test]
    async fn valid_token_attaches_identity() {
        let tokens = Arc::new(TokenService::new("test-secret", None));
        let token = token_for(&tokens, "u1");

        let body = call(app(tokens), Some(format!("Bearer {}", token))).await;
        assert_eq!(body, "u1");
    }

    #[tokio::test]
    async fn missing_or_bad_tokens_stay_anonymous() {
        let tokens = Arc::new(TokenService::new("test-secret", None));
        let foreign = token_for(&TokenService::new("other", None), "u1");

        assert_eq!(call(app(tokens.clone()), None).await, "anonymous");
        assert_eq!(
            call(app(tokens.clone()), Some("Bearer garbage".to_string())).await,
            "anonymous"
        );
        assert_eq!(
            call(app(tokens), Some(format!("Bearer {}", foreign))).await,
            "anonymous"
        );
    }

    #[test]
    fn bearer_scheme_is_required() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic abc".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, "bearer  abc ".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc"));
    }
}
