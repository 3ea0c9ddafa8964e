use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tier 0 is reserved for golfers an admin hand-picked as elite; tiers 1-6
/// come from world-ranking bands.
pub const ELITE_TIER: u8 = 0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierAssignment {
    pub golfer_id: i64,
    pub tier: u8,
}

/// Band the official world ranking into tiers 1-6.
#[must_use]
pub fn tier_for_world_ranking(ranking: u32) -> u8 {
    match ranking {
        0..=10 => 1,
        11..=25 => 2,
        26..=50 => 3,
        51..=100 => 4,
        101..=200 => 5,
        _ => 6,
    }
}

/// Point price per tier, charged against an entry's pick budget. Independent
/// of live performance.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TierSchedule {
    points: [u32; 7],
}

impl Default for TierSchedule {
    fn default() -> Self {
        // index 0 = elite tier
        Self {
            points: [10, 8, 6, 5, 4, 3, 1],
        }
    }
}

impl TierSchedule {
    #[must_use]
    pub fn points_for(&self, tier: u8) -> u32 {
        self.points
            .get(tier as usize)
            .copied()
            .unwrap_or_else(|| self.points[self.points.len() - 1])
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EntryPicks {
    pub entry_id: i64,
    pub golfer_ids: Vec<i64>,
}

/// True when the summed tier points of `picks` fit under `max_points`.
/// Golfers without a tier assignment price at the cheapest band.
#[must_use]
pub fn picks_within_budget(
    picks: &EntryPicks,
    tiers: &[TierAssignment],
    schedule: &TierSchedule,
    max_points: u32,
) -> bool {
    let by_golfer: HashMap<i64, u8, RandomState> =
        tiers.iter().map(|t| (t.golfer_id, t.tier)).collect();

    let spent: u32 = picks
        .golfer_ids
        .iter()
        .map(|id| schedule.points_for(by_golfer.get(id).copied().unwrap_or(6)))
        .sum();

    spent <= max_points
}
