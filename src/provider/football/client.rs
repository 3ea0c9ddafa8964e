use super::wire::ScoreboardResponse;
use super::ScoreboardApi;
use crate::error::PoolError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const ESPN_FOOTBALL: &str = "https://site.api.espn.com/apis/site/v2/sports/football/nfl";

/// Reqwest-backed scoreboard client. Base URL is swappable so tests can point
/// it at a local mock server.
#[derive(Debug, Clone)]
pub struct EspnScoreboardClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for EspnScoreboardClient {
    fn default() -> Self {
        Self::with_base_url(ESPN_FOOTBALL)
    }
}

impl EspnScoreboardClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[async_trait]
impl ScoreboardApi for EspnScoreboardClient {
    async fn fetch_scoreboard(&self) -> Result<ScoreboardResponse, PoolError> {
        let url = format!("{}/scoreboard", self.base_url);
        log::debug!("fetching scoreboard from {url}");

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| PoolError::Network(format!("{url}: {e}")))?;

        response
            .json::<ScoreboardResponse>()
            .await
            .map_err(|e| PoolError::Parse(format!("{url}: {e}")))
    }
}
