use super::wire::{WireCompetitor, WireEvent, WireLineScore};
use crate::error::PoolError;
use crate::model::{GameState, GameStatus, QuarterTotals, TeamSide};

/// Fixed status lookup. Anything unrecognized is treated as not yet started.
#[must_use]
pub fn parse_status(name: &str) -> GameStatus {
    match name {
        "STATUS_IN_PROGRESS" | "STATUS_HALFTIME" => GameStatus::InProgress,
        "STATUS_FINAL" | "STATUS_FINAL_OVERTIME" => GameStatus::Final,
        "STATUS_CANCELED" | "STATUS_POSTPONED" => GameStatus::Cancelled,
        _ => GameStatus::Scheduled,
    }
}

/// Pure projection of one scoreboard event into canonical game state.
///
/// # Errors
///
/// Returns `PoolError::Normalize` when either side of the game cannot be
/// identified from the payload; a guessed home/away would corrupt every
/// squares assignment downstream, so no record is produced at all.
pub fn normalize_event(event: &WireEvent) -> Result<GameState, PoolError> {
    let event_id = event.id.clone().unwrap_or_default();

    let status_name = event
        .status
        .as_ref()
        .and_then(|s| s.status_type.as_ref())
        .and_then(|t| t.name.as_deref())
        .unwrap_or("");
    let status = parse_status(status_name);

    let period = event.status.as_ref().and_then(|s| s.period);
    let clock = event.status.as_ref().and_then(|s| s.display_clock.clone());

    // Provider halftime code, or sitting in period 2 of a game that has not
    // gone final.
    let halftime = status_name == "STATUS_HALFTIME"
        || (period == Some(2) && status != GameStatus::Final);

    let competitors: Vec<&WireCompetitor> = event
        .competitions
        .as_deref()
        .unwrap_or_default()
        .iter()
        .flat_map(|c| c.competitors.iter().flatten())
        .collect();

    let home = pick_side(&competitors, "home").ok_or_else(|| {
        PoolError::Normalize(format!("event {event_id}: home side missing from payload"))
    })?;
    let away = pick_side(&competitors, "away").ok_or_else(|| {
        PoolError::Normalize(format!("event {event_id}: away side missing from payload"))
    })?;

    Ok(GameState {
        home: normalize_side(home, status, period, &event_id),
        away: normalize_side(away, status, period, &event_id),
        event_id,
        status,
        period,
        clock,
        halftime,
    })
}

fn pick_side<'a>(competitors: &[&'a WireCompetitor], side: &str) -> Option<&'a WireCompetitor> {
    competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some(side))
        .copied()
}

fn normalize_side(
    competitor: &WireCompetitor,
    status: GameStatus,
    period: Option<u8>,
    event_id: &str,
) -> TeamSide {
    let team = competitor
        .team
        .as_ref()
        .and_then(|t| t.display_name.clone().or_else(|| t.abbreviation.clone()))
        .unwrap_or_default();

    let score = if status == GameStatus::Scheduled {
        None
    } else {
        match competitor.score.as_deref() {
            None | Some("") => None,
            Some(raw) => match raw.parse::<u32>() {
                Ok(v) => Some(v),
                Err(_) => {
                    log::warn!("event {event_id}: unparseable score {raw:?} for {team}");
                    None
                }
            },
        }
    };

    TeamSide {
        team,
        score,
        quarters: quarter_totals(
            competitor.linescores.as_deref().unwrap_or_default(),
            status,
            period,
        ),
    }
}

/// Cumulative totals through each quarter, summing the per-period linescores
/// with absent periods counting 0. A quarter materializes once the game has
/// reached or passed it; the fourth only at final, since that is the number a
/// squares payout is settled on.
fn quarter_totals(linescores: &[WireLineScore], status: GameStatus, period: Option<u8>) -> QuarterTotals {
    let reached = |quarter: u8| {
        status == GameStatus::Final || (quarter < 4 && period.unwrap_or(0) >= quarter)
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let through = |quarter: u8| {
        linescores
            .iter()
            .take(quarter as usize)
            .map(|l| l.value.unwrap_or(0.0))
            .sum::<f64>() as u32
    };

    let materialize = |quarter: u8| reached(quarter).then(|| through(quarter));

    QuarterTotals {
        q1: materialize(1),
        q2: materialize(2),
        q3: materialize(3),
        q4: materialize(4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::football::wire::{
        WireCompetition, WireStatus, WireStatusType, WireTeam,
    };

    fn competitor(side: &str, team: &str, score: &str, periods: &[f64]) -> WireCompetitor {
        WireCompetitor {
            home_away: Some(side.into()),
            team: Some(WireTeam {
                display_name: Some(team.into()),
                abbreviation: None,
            }),
            score: Some(score.into()),
            linescores: Some(
                periods
                    .iter()
                    .map(|&v| WireLineScore { value: Some(v) })
                    .collect(),
            ),
        }
    }

    fn event(status_name: &str, period: u8, competitors: Vec<WireCompetitor>) -> WireEvent {
        WireEvent {
            id: Some("401547417".into()),
            name: None,
            date: None,
            status: Some(WireStatus {
                status_type: Some(WireStatusType {
                    name: Some(status_name.into()),
                }),
                period: Some(period),
                display_clock: Some("8:24".into()),
            }),
            competitions: Some(vec![WireCompetition {
                competitors: Some(competitors),
            }]),
        }
    }

    #[test]
    fn in_progress_second_period_materializes_q1_and_q2_only() {
        let game = normalize_event(&event(
            "STATUS_IN_PROGRESS",
            2,
            vec![
                competitor("home", "Chiefs", "21", &[14.0, 7.0]),
                competitor("away", "Bills", "17", &[3.0, 14.0]),
            ],
        ))
        .unwrap();

        assert_eq!(game.status, GameStatus::InProgress);
        assert!(game.halftime);
        assert_eq!(game.home.score, Some(21));
        assert_eq!(game.away.score, Some(17));
        assert_eq!(game.home.quarters.q1, Some(14));
        assert_eq!(game.home.quarters.q2, Some(21));
        assert_eq!(game.away.quarters.q2, Some(17));
        assert_eq!(game.home.quarters.q3, None);
        assert_eq!(game.home.quarters.q4, None);
    }

    #[test]
    fn final_game_materializes_all_quarters() {
        let game = normalize_event(&event(
            "STATUS_FINAL",
            4,
            vec![
                competitor("home", "Chiefs", "31", &[14.0, 7.0, 3.0, 7.0]),
                competitor("away", "Bills", "24", &[3.0, 14.0, 0.0, 7.0]),
            ],
        ))
        .unwrap();

        assert_eq!(game.status, GameStatus::Final);
        assert!(!game.halftime);
        assert_eq!(game.home.quarters.q4, Some(31));
        assert_eq!(game.away.quarters.q4, Some(24));
        // cumulative, never decreasing
        assert!(game.away.quarters.q2 >= game.away.quarters.q1);
        assert_eq!(game.away.quarters.q3, Some(17));
    }

    #[test]
    fn fourth_quarter_in_progress_withholds_q4() {
        let game = normalize_event(&event(
            "STATUS_IN_PROGRESS",
            4,
            vec![
                competitor("home", "Chiefs", "28", &[14.0, 7.0, 0.0, 7.0]),
                competitor("away", "Bills", "24", &[3.0, 14.0, 0.0, 7.0]),
            ],
        ))
        .unwrap();

        assert_eq!(game.home.quarters.q3, Some(21));
        assert_eq!(game.home.quarters.q4, None);
    }

    #[test]
    fn missing_period_values_count_zero_in_cumulative_totals() {
        let mut home = competitor("home", "Chiefs", "14", &[14.0]);
        home.linescores = Some(vec![WireLineScore { value: Some(14.0) }]);
        let game = normalize_event(&event(
            "STATUS_IN_PROGRESS",
            2,
            vec![home, competitor("away", "Bills", "3", &[3.0])],
        ))
        .unwrap();

        // period 2 reached but no second linescore yet
        assert_eq!(game.home.quarters.q2, Some(14));
    }

    #[test]
    fn scheduled_game_has_null_scores_and_quarters() {
        let game = normalize_event(&event(
            "STATUS_SCHEDULED",
            0,
            vec![
                competitor("home", "Chiefs", "0", &[]),
                competitor("away", "Bills", "0", &[]),
            ],
        ))
        .unwrap();

        assert_eq!(game.status, GameStatus::Scheduled);
        assert_eq!(game.home.score, None);
        assert_eq!(game.away.score, None);
        assert_eq!(game.home.quarters, QuarterTotals::default());
    }

    #[test]
    fn halftime_code_and_second_period_both_signal_halftime() {
        let by_code = normalize_event(&event(
            "STATUS_HALFTIME",
            2,
            vec![
                competitor("home", "Chiefs", "14", &[7.0, 7.0]),
                competitor("away", "Bills", "10", &[10.0, 0.0]),
            ],
        ))
        .unwrap();
        assert!(by_code.halftime);
        assert_eq!(by_code.status, GameStatus::InProgress);

        let by_period = normalize_event(&event(
            "STATUS_IN_PROGRESS",
            2,
            vec![
                competitor("home", "Chiefs", "14", &[7.0, 7.0]),
                competitor("away", "Bills", "10", &[10.0, 0.0]),
            ],
        ))
        .unwrap();
        assert!(by_period.halftime);
    }

    #[test]
    fn status_lookup_covers_cancellations() {
        assert_eq!(parse_status("STATUS_CANCELED"), GameStatus::Cancelled);
        assert_eq!(parse_status("STATUS_POSTPONED"), GameStatus::Cancelled);
        assert_eq!(parse_status("STATUS_FINAL_OVERTIME"), GameStatus::Final);
        assert_eq!(parse_status("STATUS_DELAYED"), GameStatus::Scheduled);
        assert_eq!(parse_status(""), GameStatus::Scheduled);
    }

    #[test]
    fn missing_home_designation_is_a_hard_error() {
        let mut anonymous = competitor("home", "Chiefs", "21", &[14.0, 7.0]);
        anonymous.home_away = None;
        let result = normalize_event(&event(
            "STATUS_IN_PROGRESS",
            2,
            vec![anonymous, competitor("away", "Bills", "17", &[3.0, 14.0])],
        ));

        assert!(matches!(result, Err(PoolError::Normalize(_))));
    }

    #[test]
    fn unparseable_score_becomes_null_not_zero_guess() {
        let mut home = competitor("home", "Chiefs", "TBD", &[]);
        home.linescores = None;
        let game = normalize_event(&event(
            "STATUS_IN_PROGRESS",
            1,
            vec![home, competitor("away", "Bills", "3", &[3.0])],
        ))
        .unwrap();
        assert_eq!(game.home.score, None);
        assert_eq!(game.away.score, Some(3));
    }
}
