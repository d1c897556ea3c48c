use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::http::state::AppState;
use crate::player::normalize_with;
use crate::source::fetch_with_timeout;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// GET /query — one host round-trip, normalized.
///
/// 500 only when the round-trip itself fails. A reachable host with missing
/// or odd fields always yields 200 (possibly the idle record).
pub async fn get_query(State(state): State<AppState>) -> Response {
    let raw = match fetch_with_timeout(state.source.as_ref(), state.fetch_timeout).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("query failed: {}", e);
            let body = ErrorBody {
                error: e.to_string(),
            };
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        }
    };

    let query = normalize_with(&raw, &state.normalize);
    tracing::debug!(
        "query: has_song={} title={:?} position={}",
        query.player.has_song,
        query.track.title,
        query.player.seekbar_current_position_human
    );
    (StatusCode::OK, Json(query)).into_response()
}
