use crate::model::{EntryPicks, GolferResult, ROUNDS_PER_TOURNAMENT};
use crate::score::standings::{rank_entries, EntryStanding};
use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Contest configuration for best-ball scoring.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ScoringRules {
    /// Picks an entry must field (M).
    pub picks_required: usize,
    /// Best picks that count toward the entry total (N).
    pub counted_picks: usize,
    /// Strokes charged for each round a cut golfer never played. Deliberately
    /// a worst-case number; a missed cut can never score better than having
    /// played.
    pub missed_cut_round_strokes: i32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            picks_required: 6,
            counted_picks: 4,
            missed_cut_round_strokes: 80,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GolferScore {
    pub golfer_id: i64,
    pub strokes: i32,
}

/// An entry's computed score. `total` is `None` until every required pick has
/// a resolved golfer result; a partial sum would rank ahead of complete
/// entries on a technicality.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EntryScore {
    pub entry_id: i64,
    pub total: Option<i32>,
    pub counted: Vec<GolferScore>,
    pub dropped: Vec<GolferScore>,
}

/// Single comparable number for one golfer. Made the cut: strokes actually
/// recorded so far, unplayed rounds excluded (not zeroed), so in-progress
/// totals stay meaningful. Missed the cut: completed rounds plus the
/// configured charge per unplayed round.
#[must_use]
pub fn score_golfer(result: &GolferResult, rules: &ScoringRules) -> i32 {
    let played = result.strokes_so_far();
    if result.made_cut {
        return played;
    }
    let missing = (ROUNDS_PER_TOURNAMENT - result.rounds_played()) as i32;
    played + rules.missed_cut_round_strokes * missing
}

/// Best-N-of-M selection. Scores sort ascending (golf: fewer strokes wins),
/// the best `counted_picks` count, the remainder are dropped but reported.
#[must_use]
pub fn score_entry(entry_id: i64, scores: Vec<GolferScore>, rules: &ScoringRules) -> EntryScore {
    let mut sorted = scores;
    sorted.sort_by(|a, b| {
        a.strokes
            .cmp(&b.strokes)
            .then_with(|| a.golfer_id.cmp(&b.golfer_id))
    });

    let complete = sorted.len() >= rules.picks_required;
    let cutoff = rules.counted_picks.min(sorted.len());
    let dropped = sorted.split_off(cutoff);
    let counted = sorted;

    let total = complete.then(|| counted.iter().map(|s| s.strokes).sum());

    EntryScore {
        entry_id,
        total,
        counted,
        dropped,
    }
}

/// Full standings pass: join each entry's picks to the canonical golfer
/// results, score, and rank. Picks with no resolved result are simply absent
/// from the entry's score set, which is what drives the null-total rule.
#[must_use]
pub fn compute_standings(
    entries: &[EntryPicks],
    results: &[GolferResult],
    rules: &ScoringRules,
) -> Vec<EntryStanding> {
    let by_golfer: HashMap<i64, &GolferResult, RandomState> =
        results.iter().map(|r| (r.golfer_id, r)).collect();

    let scored = entries
        .iter()
        .map(|entry| {
            let golfer_scores = entry
                .golfer_ids
                .iter()
                .filter_map(|id| by_golfer.get(id))
                .map(|result| GolferScore {
                    golfer_id: result.golfer_id,
                    strokes: score_golfer(result, rules),
                })
                .collect();
            score_entry(entry.entry_id, golfer_scores, rules)
        })
        .collect();

    rank_entries(scored)
}
