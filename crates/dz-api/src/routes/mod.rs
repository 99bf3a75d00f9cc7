//! API route definitions and router builder.

pub mod chat;
pub mod health;
pub mod predict;

use axum::Router;
use axum::http::{HeaderValue, Uri};
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the Axum router with all routes and middleware, open to any origin.
pub fn build_router(state: AppState) -> Router {
    build_router_with_origins(state, &[])
}

/// Build the router, restricting CORS to `origins` unless the list is empty.
pub fn build_router_with_origins(state: AppState, origins: &[String]) -> Router {
    Router::new()
        .route("/", get(health::status))
        .route("/health", get(health::health))
        .route("/predict", post(predict::predict))
        .route("/chat", post(chat::chat))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {uri}"))
}
