use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::player::RawPlayerState;
use crate::source::{PlayerSource, SourceError};

/// Reads a JSON snapshot of the player object from disk on every request.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PlayerSource for FileSource {
    async fn fetch_player_state(&self) -> Result<RawPlayerState, SourceError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let state: RawPlayerState = serde_json::from_str(&content)?;
        tracing::trace!("read player state from {}", self.path.display());
        Ok(state)
    }
}
