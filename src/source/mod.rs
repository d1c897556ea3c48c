//! Where raw player state comes from.
//!
//! The host owns the mechanism; this crate only needs one asynchronous read
//! per request. Two bridges are provided: an HTTP endpoint exposed by the host
//! (or a helper injected into it) and a JSON snapshot file the host rewrites.

pub mod file;
pub mod http_bridge;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::player::RawPlayerState;

pub use file::FileSource;
pub use http_bridge::HttpBridgeSource;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read player state: {0}")]
    Io(#[from] std::io::Error),
    #[error("player state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("host bridge request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("host bridge returned HTTP {0}")]
    Status(u16),
    #[error("host did not answer within {} ms", .0.as_millis())]
    Timeout(Duration),
}

/// One round-trip into the host, returning its current player object.
#[async_trait]
pub trait PlayerSource: Send + Sync {
    async fn fetch_player_state(&self) -> Result<RawPlayerState, SourceError>;
}

/// Fetch, giving up after `timeout`. The abandoned fetch is dropped.
pub async fn fetch_with_timeout(
    source: &dyn PlayerSource,
    timeout: Duration,
) -> Result<RawPlayerState, SourceError> {
    match tokio::time::timeout(timeout, source.fetch_player_state()).await {
        Ok(result) => result,
        Err(_) => Err(SourceError::Timeout(timeout)),
    }
}

/// Configured location of the host's player state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    Http(String),
    File(PathBuf),
}

impl SourceSpec {
    /// `http://` and `https://` locations go through the HTTP bridge; anything
    /// else is a snapshot file path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            SourceSpec::Http(trimmed.to_string())
        } else {
            SourceSpec::File(PathBuf::from(trimmed))
        }
    }

    pub fn into_source(self) -> Result<Arc<dyn PlayerSource>, SourceError> {
        let source: Arc<dyn PlayerSource> = match self {
            SourceSpec::Http(url) => Arc::new(HttpBridgeSource::new(url)?),
            SourceSpec::File(path) => Arc::new(FileSource::new(path)),
        };
        Ok(source)
    }
}

impl std::fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceSpec::Http(url) => write!(f, "{}", url),
            SourceSpec::File(path) => write!(f, "{}", path.display()),
        }
    }
}
