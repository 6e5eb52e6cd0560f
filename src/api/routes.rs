//! Application route configuration.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{account_routes, auth_routes, health, session_routes};
use super::middleware::{auth_middleware, cors_layer, with_security_headers};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::Config;

/// Create the application router with all routes configured
pub fn create_router(state: AppState, config: &Config) -> Router {
    let guard = middleware::from_fn_with_state(state.clone(), auth_middleware);

    let auth = auth_routes().merge(session_routes().route_layer(guard.clone()));
    let accounts = account_routes().route_layer(guard);

    let api = Router::new()
        .nest("/auth", auth)
        .nest("/accounts", accounts);

    // axum refuses to nest at the root.
    let api = if config.base_path.is_empty() {
        api
    } else {
        Router::new().nest(&config.base_path, api)
    };

    let router = Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api);

    // Global middleware
    with_security_headers(router)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
