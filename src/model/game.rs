use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a team-sport game as the rest of the system sees it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Final,
    Cancelled,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Final | GameStatus::Cancelled)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::InProgress => "in progress",
            GameStatus::Final => "final",
            GameStatus::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

/// Cumulative score through each quarter. A quarter is `None` until the game
/// has reached it; the fourth quarter stays `None` until the game is final.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuarterTotals {
    pub q1: Option<u32>,
    pub q2: Option<u32>,
    pub q3: Option<u32>,
    pub q4: Option<u32>,
}

impl QuarterTotals {
    #[must_use]
    pub fn get(&self, quarter: u8) -> Option<u32> {
        match quarter {
            1 => self.q1,
            2 => self.q2,
            3 => self.q3,
            4 => self.q4,
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TeamSide {
    pub team: String,
    /// Running score; `None` before kickoff.
    pub score: Option<u32>,
    pub quarters: QuarterTotals,
}

/// Canonical projection of one game, rebuilt whole on every poll. Squares
/// winners are read off the quarter totals, so those carry the invariants:
/// totals never decrease across quarters and q4 appears only at final.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub event_id: String,
    pub home: TeamSide,
    pub away: TeamSide,
    pub status: GameStatus,
    pub period: Option<u8>,
    pub clock: Option<String>,
    pub halftime: bool,
}
