use super::wire::{LeaderboardResponse, ScheduleResponse};
use super::LeaderboardApi;
use crate::error::PoolError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const ESPN_GOLF: &str = "https://site.api.espn.com/apis/site/v2/sports/golf/pga";

#[derive(Debug, Clone)]
pub struct EspnGolfClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for EspnGolfClient {
    fn default() -> Self {
        Self::with_base_url(ESPN_GOLF)
    }
}

impl EspnGolfClient {
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

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, PoolError> {
        log::debug!("fetching {url}");
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| PoolError::Network(format!("{url}: {e}")))?;

        response
            .json::<T>()
            .await
            .map_err(|e| PoolError::Parse(format!("{url}: {e}")))
    }
}

#[async_trait]
impl LeaderboardApi for EspnGolfClient {
    async fn fetch_leaderboard(&self, tournament_id: &str) -> Result<LeaderboardResponse, PoolError> {
        let url = format!("{}/leaderboard?event={tournament_id}", self.base_url);
        self.get_json(&url).await
    }

    async fn fetch_schedule(&self, season: i32) -> Result<ScheduleResponse, PoolError> {
        let url = format!("{}/tourschedule?season={season}", self.base_url);
        self.get_json(&url).await
    }
}
