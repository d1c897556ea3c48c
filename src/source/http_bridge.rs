use async_trait::async_trait;

use crate::player::RawPlayerState;
use crate::source::{PlayerSource, SourceError};

/// Pulls the player object from an HTTP endpoint inside the host.
#[derive(Debug, Clone)]
pub struct HttpBridgeSource {
    client: reqwest::Client,
    url: String,
}

impl HttpBridgeSource {
    pub fn new(url: impl Into<String>) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nowplaying/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PlayerSource for HttpBridgeSource {
    async fn fetch_player_state(&self) -> Result<RawPlayerState, SourceError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        let state: RawPlayerState = serde_json::from_slice(&body)?;
        Ok(state)
    }
}
