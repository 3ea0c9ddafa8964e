use crate::model::{GameStatus, TournamentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Externally visible pool lifecycle. Never stored; always recomputed from
/// configuration plus the clock so stored state can't drift from the truth.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PoolStatus {
    Draft,
    Open,
    InProgress,
    Completed,
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PoolStatus::Draft => "draft",
            PoolStatus::Open => "open",
            PoolStatus::InProgress => "in progress",
            PoolStatus::Completed => "completed",
        };
        write!(f, "{s}")
    }
}

/// The one fact about a linked event that status derivation needs.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkedEvent {
    pub terminal: bool,
}

impl From<TournamentStatus> for LinkedEvent {
    fn from(status: TournamentStatus) -> Self {
        Self {
            terminal: status.is_terminal(),
        }
    }
}

impl From<GameStatus> for LinkedEvent {
    fn from(status: GameStatus) -> Self {
        Self {
            terminal: status.is_terminal(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct PoolSchedule {
    pub linked_event: Option<LinkedEvent>,
    pub lock_time: Option<DateTime<Utc>>,
    pub public_entry: bool,
}

/// First match wins, and the order is load-bearing: an unlinked pool is a
/// draft no matter what else is set, a finished event completes the pool even
/// if the lock is long past, and a passed lock trumps open entry.
#[must_use]
pub fn derive_status(schedule: &PoolSchedule, now: DateTime<Utc>) -> PoolStatus {
    let Some(event) = schedule.linked_event else {
        return PoolStatus::Draft;
    };
    if event.terminal {
        return PoolStatus::Completed;
    }
    if schedule.lock_time.is_some_and(|lock| now > lock) {
        return PoolStatus::InProgress;
    }
    if schedule.public_entry {
        return PoolStatus::Open;
    }
    PoolStatus::Draft
}
