pub mod client;
pub mod majors;
pub mod normalize;
pub mod wire;

use crate::error::PoolError;
use crate::model::{Leaderboard, ScheduleEvent};
use async_trait::async_trait;
use normalize::{normalize_leaderboard, normalize_schedule};
use wire::{LeaderboardResponse, ScheduleResponse};

pub use client::EspnGolfClient;
pub use majors::is_major;

/// Fetch seam for golf data: live leaderboards and the season schedule. Raw
/// payloads in, no transformation; `normalize` does the rest offline.
#[async_trait]
pub trait LeaderboardApi: Send + Sync {
    async fn fetch_leaderboard(&self, tournament_id: &str)
        -> Result<LeaderboardResponse, PoolError>;

    async fn fetch_schedule(&self, season: i32) -> Result<ScheduleResponse, PoolError>;
}

/// # Errors
///
/// `Network` when the provider is unreachable, `NotFound` when the requested
/// tournament is absent from the payload, `Normalize` when the tournament is
/// present but structurally unusable.
pub async fn fetch_tournament_leaderboard(
    api: &dyn LeaderboardApi,
    tournament_id: &str,
) -> Result<Leaderboard, PoolError> {
    let payload = api.fetch_leaderboard(tournament_id).await?;
    let events = payload.events.unwrap_or_default();
    let tournament = events
        .iter()
        .find(|t| t.id.as_deref() == Some(tournament_id))
        .ok_or_else(|| {
            PoolError::NotFound(format!("tournament {tournament_id} not in leaderboard payload"))
        })?;
    normalize_leaderboard(tournament)
}

/// # Errors
///
/// `Network` or `Parse` from the underlying fetch; an empty season is an
/// empty list, not an error.
pub async fn fetch_season_schedule(
    api: &dyn LeaderboardApi,
    season: i32,
) -> Result<Vec<ScheduleEvent>, PoolError> {
    let payload = api.fetch_schedule(season).await?;
    Ok(normalize_schedule(&payload))
}

/// Majors only, for pools that restrict linking to the four big ones.
#[must_use]
pub fn majors_only(schedule: Vec<ScheduleEvent>) -> Vec<ScheduleEvent> {
    schedule.into_iter().filter(|e| e.major).collect()
}
