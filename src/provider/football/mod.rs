pub mod client;
pub mod normalize;
pub mod wire;

use crate::error::PoolError;
use crate::model::GameState;
use async_trait::async_trait;
use futures::future::join_all;
use normalize::normalize_event;
use wire::ScoreboardResponse;

pub use client::EspnScoreboardClient;

/// Fetch seam for the live scoreboard. Fetching returns the raw payload
/// untouched; everything interesting happens in `normalize`, which needs no
/// network.
#[async_trait]
pub trait ScoreboardApi: Send + Sync {
    async fn fetch_scoreboard(&self) -> Result<ScoreboardResponse, PoolError>;
}

/// # Errors
///
/// `Network` when the provider cannot be reached, `NotFound` when the event
/// id is absent from an otherwise valid payload, `Normalize` when the event
/// is present but unusable. Never substitutes stale or zeroed scores; the
/// caller decides what to do with its last known state.
pub async fn fetch_game_state(
    api: &dyn ScoreboardApi,
    event_id: &str,
) -> Result<GameState, PoolError> {
    let payload = api.fetch_scoreboard().await?;
    let events = payload.events.unwrap_or_default();
    let event = events
        .iter()
        .find(|e| e.id.as_deref() == Some(event_id))
        .ok_or_else(|| {
            PoolError::NotFound(format!("event {event_id} not in scoreboard payload"))
        })?;
    normalize_event(event)
}

/// Refresh several pools' games at once. Events are independent, so failures
/// are isolated per event rather than failing the batch.
pub async fn fetch_game_states(
    api: &dyn ScoreboardApi,
    event_ids: &[&str],
) -> Vec<(String, Result<GameState, PoolError>)> {
    let fetches = event_ids.iter().map(|id| async move {
        let state = fetch_game_state(api, id).await;
        ((*id).to_string(), state)
    });
    join_all(fetches).await
}
