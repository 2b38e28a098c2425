use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::modules::departments::router::init_departments_router;
use crate::modules::health::router::init_health_router;
use crate::modules::navigation::router::init_navigation_router;
use crate::modules::permissions::router::init_permissions_router;
use crate::state::AppState;
use campus_config::CorsConfig;
use axum::http::{HeaderValue, Method};
use axum::{Json, Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use tracing::warn;
use utoipa::OpenApi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(init_health_router())
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest(
            "/api",
            Router::new()
                .nest("/permissions", init_permissions_router())
                .nest("/departments", init_departments_router())
                .nest("/navigation", init_navigation_router()),
        )
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}

/// Builds the credentialed CORS layer. Wildcard and unparsable origins are
/// skipped, since `AllowOrigin::list` cannot take `*`.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter(|origin| {
            let wildcard = origin.trim() == "*";
            if wildcard {
                warn!("Ignoring wildcard CORS origin");
            }
            !wildcard
        })
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
}
