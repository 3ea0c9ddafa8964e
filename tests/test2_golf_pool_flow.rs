use poolside::model::{EntryPicks, PlayerStatus, TournamentStatus};
use poolside::provider::golf::normalize::normalize_leaderboard;
use poolside::provider::golf::wire::LeaderboardResponse;
use poolside::score::{compute_standings, ScoringRules};

fn leaderboard() -> poolside::model::Leaderboard {
    let payload: LeaderboardResponse =
        serde_json::from_str(include_str!("fixtures/golf_leaderboard.json"))
            .expect("fixture leaderboard should parse");
    let events = payload.events.unwrap();
    normalize_leaderboard(&events[0]).unwrap()
}

#[test]
fn fixture_leaderboard_normalizes() {
    let board = leaderboard();

    assert_eq!(board.tournament_id, "401580351");
    assert_eq!(board.name, "Masters Tournament");
    assert_eq!(board.status, TournamentStatus::Completed);
    assert_eq!(board.players.len(), 6);

    let winner = &board.players[0];
    assert_eq!(winner.name, "Scottie Scheffler");
    assert_eq!(winner.position.as_deref(), Some("1"));
    assert_eq!(winner.result.strokes_so_far(), 277);

    let tied = &board.players[1];
    assert_eq!(tied.position.as_deref(), Some("T2"));

    let cut = board.players.iter().find(|p| p.name == "Jon Rahm").unwrap();
    assert_eq!(cut.status, PlayerStatus::Cut);
    assert!(!cut.result.made_cut);
    assert_eq!(cut.result.rounds[2], None);
}

#[test]
fn standings_from_fixture_rank_with_ties_and_incomplete_entry() {
    let board = leaderboard();
    let results: Vec<_> = board.players.iter().map(|p| p.result.clone()).collect();

    let rules = ScoringRules {
        picks_required: 3,
        counted_picks: 2,
        missed_cut_round_strokes: 80,
    };

    let entries = vec![
        // Scheffler 277 + McIlroy 281, Rahm (cut, 314) dropped
        EntryPicks { entry_id: 1, golfer_ids: vec![9478, 3470, 780] },
        // Schauffele 281 + Aberg 282, Thomas dropped
        EntryPicks { entry_id: 2, golfer_ids: vec![10980, 4364873, 6798] },
        // McIlroy 281 + Schauffele 281, Thomas dropped
        EntryPicks { entry_id: 3, golfer_ids: vec![3470, 10980, 6798] },
        // one pick never resolved
        EntryPicks { entry_id: 4, golfer_ids: vec![9478, 999_001, 999_002] },
        // Aberg 282 + McIlroy 281, ties entry 2 at 563
        EntryPicks { entry_id: 5, golfer_ids: vec![4364873, 3470, 6798] },
    ];

    let standings = compute_standings(&entries, &results, &rules);

    let summary: Vec<(i64, Option<i32>, usize, bool)> = standings
        .iter()
        .map(|s| (s.entry_id, s.total, s.rank, s.tied))
        .collect();

    assert_eq!(
        summary,
        vec![
            (1, Some(558), 1, false),
            (3, Some(562), 2, false),
            (2, Some(563), 3, true),
            (5, Some(563), 3, true),
            (4, None, 6, false),
        ]
    );

    // the cut golfer was charged, not zeroed, so he lands in the dropped set
    let first = &standings[0];
    assert_eq!(first.dropped.len(), 1);
    assert_eq!(first.dropped[0].golfer_id, 780);
    assert_eq!(first.dropped[0].strokes, 76 + 78 + 160);
}
