use crate::score::engine::{EntryScore, GolferScore};
use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// A ranked row of the pool scoreboard. Competition ranking: tied entries
/// share a rank and the next distinct score resumes at its true 1-indexed
/// position ("1, 1, 3", never "1, 1, 2").
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EntryStanding {
    pub entry_id: i64,
    pub total: Option<i32>,
    pub rank: usize,
    pub tied: bool,
    pub counted: Vec<GolferScore>,
    pub dropped: Vec<GolferScore>,
}

/// Total order over entries. Scored entries sort ascending; unscoreable ones
/// sort after every scored entry (stable among themselves), take rank
/// entry-count + 1, and are never flagged tied. Ranking an empty collection
/// is an empty scoreboard, not an error.
#[must_use]
pub fn rank_entries(entries: Vec<EntryScore>) -> Vec<EntryStanding> {
    let entry_count = entries.len();

    let mut score_counts: HashMap<i32, usize, RandomState> = HashMap::default();
    for entry in &entries {
        if let Some(total) = entry.total {
            *score_counts.entry(total).or_insert(0) += 1;
        }
    }

    let mut sorted = entries;
    sorted.sort_by(|a, b| match (a.total, b.total) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let mut current_rank = 1;
    let mut previous: Option<i32> = None;

    sorted
        .into_iter()
        .enumerate()
        .map(|(position, entry)| {
            let (rank, tied) = match entry.total {
                Some(total) => {
                    if previous != Some(total) {
                        current_rank = position + 1;
                    }
                    previous = Some(total);
                    (current_rank, score_counts[&total] > 1)
                }
                None => (entry_count + 1, false),
            };
            EntryStanding {
                entry_id: entry.entry_id,
                total: entry.total,
                rank,
                tied,
                counted: entry.counted,
                dropped: entry.dropped,
            }
        })
        .collect()
}
