pub mod query;
pub mod state;

use axum::http::{header, HeaderName, Method};
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::state::AppState;

const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/query", get(query::get_query))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Widgets are served from arbitrary origins (browser sources, local files),
/// so any origin may read the endpoint.
fn cors_layer() -> CorsLayer {
    let headers = [
        header::ORIGIN,
        X_REQUESTED_WITH,
        header::CONTENT_TYPE,
        header::ACCEPT,
    ];
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(headers.clone())
        .expose_headers(headers)
}
