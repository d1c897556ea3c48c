use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use nowplaying::http::{build_router, state::AppState};
use nowplaying::player::RawPlayerState;
use nowplaying::server::{self, BindOptions};
use nowplaying::source::{PlayerSource, SourceError};

struct FixedSource;

#[async_trait]
impl PlayerSource for FixedSource {
    async fn fetch_player_state(&self) -> Result<RawPlayerState, SourceError> {
        Ok(RawPlayerState::new(json!({
            "playing": true,
            "currentTrack": { "id": 3, "name": "Live" },
        })))
    }
}

fn app() -> axum::Router {
    build_router(AppState::new(Arc::new(FixedSource)))
}

#[tokio::test]
async fn serves_query_until_shutdown() {
    let handle = server::start(BindOptions { port: 0, public: false }, app())
        .await
        .unwrap();
    let addr = handle.local_addrs()[0];
    assert!(addr.ip().is_loopback());

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .build()
        .unwrap();
    let body: serde_json::Value = client
        .get(format!("http://{addr}/query"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["track"]["title"], "Live");

    handle.shutdown().await;

    let result = tokio::net::TcpStream::connect(addr).await;
    assert!(result.is_err(), "listener should be closed after shutdown");
}

#[tokio::test]
async fn second_bind_on_same_port_fails() {
    let handle = server::start(BindOptions { port: 0, public: false }, app())
        .await
        .unwrap();
    let port = handle.local_addrs()[0].port();

    let err = server::start(BindOptions { port, public: false }, app())
        .await
        .err()
        .expect("second bind should fail");
    assert!(err.to_string().contains("failed to bind"), "got: {err}");

    handle.shutdown().await;
}
