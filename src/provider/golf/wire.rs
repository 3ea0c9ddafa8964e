/// ESPN golf wire types — raw leaderboard and season-schedule payloads.
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LeaderboardResponse {
    pub events: Option<Vec<WireTournament>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireTournament {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<WireTournamentStatus>,
    pub competitions: Option<Vec<WireGolfCompetition>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireTournamentStatus {
    #[serde(rename = "type")]
    pub status_type: Option<WireStatusType>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireStatusType {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireGolfCompetition {
    pub competitors: Option<Vec<WireGolfer>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireGolfer {
    pub id: Option<String>,
    pub athlete: Option<WireAthlete>,
    pub status: Option<WireGolferStatus>,
    /// One entry per round, keyed by `period` 1-4.
    pub linescores: Option<Vec<WireRoundLine>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireAthlete {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireGolferStatus {
    pub position: Option<WirePosition>,
    #[serde(rename = "type")]
    pub status_type: Option<WireStatusType>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WirePosition {
    pub id: Option<String>, // numeric position as a string
    #[serde(rename = "isTie")]
    pub is_tie: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireRoundLine {
    pub period: Option<u8>,
    pub value: Option<f64>, // strokes for the round
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleResponse {
    pub events: Option<Vec<WireScheduleEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireScheduleEvent {
    pub id: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>, // ISO 8601
}
