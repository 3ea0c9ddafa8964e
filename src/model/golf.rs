use serde::{Deserialize, Serialize};
use std::fmt;

pub const ROUNDS_PER_TOURNAMENT: usize = 4;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    Upcoming,
    InProgress,
    Completed,
}

impl TournamentStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TournamentStatus::Completed)
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TournamentStatus::Upcoming => "upcoming",
            TournamentStatus::InProgress => "in progress",
            TournamentStatus::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    Active,
    Cut,
    Withdrawn,
    Disqualified,
}

/// Per-golfer raw material for scoring: round strokes as they complete, and
/// whether the golfer survived the cut. Before any cut determination exists
/// `made_cut` is true.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GolferResult {
    pub golfer_id: i64,
    pub rounds: [Option<i32>; ROUNDS_PER_TOURNAMENT],
    pub made_cut: bool,
}

impl GolferResult {
    #[must_use]
    pub fn new(golfer_id: i64) -> Self {
        Self {
            golfer_id,
            rounds: [None; ROUNDS_PER_TOURNAMENT],
            made_cut: true,
        }
    }

    /// Strokes across completed rounds only; unplayed rounds contribute
    /// nothing here (cut handling lives in the scoring rules).
    #[must_use]
    pub fn strokes_so_far(&self) -> i32 {
        self.rounds.iter().flatten().sum()
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds.iter().flatten().count()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LeaderboardPlayer {
    pub golfer_id: i64,
    pub name: String,
    /// Display position, `T`-prefixed on ties (e.g. "T2"). `None` before the
    /// provider assigns one.
    pub position: Option<String>,
    pub status: PlayerStatus,
    pub result: GolferResult,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Leaderboard {
    pub tournament_id: String,
    pub name: String,
    pub status: TournamentStatus,
    pub players: Vec<LeaderboardPlayer>,
}

/// One event on the season schedule, enough for pool setup to link against.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScheduleEvent {
    pub tournament_id: String,
    pub name: String,
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
    pub major: bool,
}
