use super::majors::is_major;
use super::wire::{ScheduleResponse, WireGolfer, WireTournament};
use crate::error::PoolError;
use crate::model::{
    GolferResult, Leaderboard, LeaderboardPlayer, PlayerStatus, ScheduleEvent, TournamentStatus,
    ROUNDS_PER_TOURNAMENT,
};
use chrono::{DateTime, Utc};

/// Three states is all the pool lifecycle needs; unrecognized codes read as
/// not-yet-started rather than guessing at progress.
#[must_use]
pub fn parse_tournament_status(name: &str) -> TournamentStatus {
    match name {
        "STATUS_IN_PROGRESS" => TournamentStatus::InProgress,
        "STATUS_FINAL" | "STATUS_PLAY_COMPLETE" | "STATUS_CANCELED" => {
            TournamentStatus::Completed
        }
        _ => TournamentStatus::Upcoming,
    }
}

#[must_use]
pub fn parse_player_status(name: &str) -> PlayerStatus {
    match name {
        "STATUS_CUT" | "CUT" => PlayerStatus::Cut,
        "STATUS_WITHDRAWN" | "WD" => PlayerStatus::Withdrawn,
        "STATUS_DISQUALIFIED" | "DQ" => PlayerStatus::Disqualified,
        _ => PlayerStatus::Active,
    }
}

/// Pure projection of a raw tournament into the canonical leaderboard.
///
/// # Errors
///
/// Returns `PoolError::Normalize` when the payload carries no tournament id
/// at all; rows that cannot be tied to a golfer are skipped with a warning
/// rather than invented.
pub fn normalize_leaderboard(tournament: &WireTournament) -> Result<Leaderboard, PoolError> {
    let tournament_id = tournament
        .id
        .clone()
        .ok_or_else(|| PoolError::Normalize("tournament payload missing id".to_string()))?;

    let status_name = tournament
        .status
        .as_ref()
        .and_then(|s| s.status_type.as_ref())
        .and_then(|t| t.name.as_deref())
        .unwrap_or("");

    let players = tournament
        .competitions
        .as_deref()
        .unwrap_or_default()
        .iter()
        .flat_map(|c| c.competitors.iter().flatten())
        .filter_map(|golfer| match normalize_golfer(golfer) {
            Some(player) => Some(player),
            None => {
                log::warn!("tournament {tournament_id}: leaderboard row without golfer id, skipping");
                None
            }
        })
        .collect();

    Ok(Leaderboard {
        tournament_id,
        name: tournament.name.clone().unwrap_or_default(),
        status: parse_tournament_status(status_name),
        players,
    })
}

fn normalize_golfer(golfer: &WireGolfer) -> Option<LeaderboardPlayer> {
    let golfer_id = golfer.id.as_deref()?.parse::<i64>().ok()?;

    let status_name = golfer
        .status
        .as_ref()
        .and_then(|s| s.status_type.as_ref())
        .and_then(|t| t.name.as_deref())
        .unwrap_or("");
    let status = parse_player_status(status_name);

    let mut rounds: [Option<i32>; ROUNDS_PER_TOURNAMENT] = [None; ROUNDS_PER_TOURNAMENT];
    for line in golfer.linescores.as_deref().unwrap_or_default() {
        let Some(period) = line.period else { continue };
        if (1..=ROUNDS_PER_TOURNAMENT as u8).contains(&period) {
            #[allow(clippy::cast_possible_truncation)]
            let strokes = line.value.map(|v| v as i32);
            rounds[usize::from(period) - 1] = strokes;
        }
    }

    Some(LeaderboardPlayer {
        golfer_id,
        name: golfer
            .athlete
            .as_ref()
            .and_then(|a| a.display_name.clone())
            .unwrap_or_default(),
        position: position_display(golfer),
        status,
        result: GolferResult {
            golfer_id,
            rounds,
            made_cut: status != PlayerStatus::Cut,
        },
    })
}

/// Raw numeric position, `T`-prefixed when the provider flags a tie.
fn position_display(golfer: &WireGolfer) -> Option<String> {
    let position = golfer.status.as_ref()?.position.as_ref()?;
    let rank = position.id.as_deref()?.parse::<u32>().ok()?;
    if position.is_tie.unwrap_or(false) {
        Some(format!("T{rank}"))
    } else {
        Some(rank.to_string())
    }
}

/// Season schedule with each event classified major/regular up front, so
/// downstream filtering is a plain retain with no I/O.
#[must_use]
pub fn normalize_schedule(response: &ScheduleResponse) -> Vec<ScheduleEvent> {
    response
        .events
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|event| {
            let tournament_id = event.id.clone()?;
            let name = event.label.clone().unwrap_or_default();
            let start_date = event
                .start_date
                .as_deref()
                .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
                .map(|dt| dt.with_timezone(&Utc));
            Some(ScheduleEvent {
                major: is_major(&name),
                tournament_id,
                name,
                start_date,
            })
        })
        .collect()
}
