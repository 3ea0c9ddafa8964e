/// ESPN scoreboard wire types — serde shapes for the raw provider payload.
/// Nothing outside this adapter sees these; `normalize` maps them into the
/// canonical `GameState`.
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    pub events: Option<Vec<WireEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireEvent {
    pub id: Option<String>,
    pub name: Option<String>,
    pub date: Option<String>, // ISO 8601
    pub status: Option<WireStatus>,
    pub competitions: Option<Vec<WireCompetition>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireStatus {
    #[serde(rename = "type")]
    pub status_type: Option<WireStatusType>,
    pub period: Option<u8>,
    #[serde(rename = "displayClock")]
    pub display_clock: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireStatusType {
    pub name: Option<String>, // "STATUS_SCHEDULED", "STATUS_IN_PROGRESS", ...
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireCompetition {
    pub competitors: Option<Vec<WireCompetitor>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireCompetitor {
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub team: Option<WireTeam>,
    pub score: Option<String>, // ESPN sends scores as strings
    /// Per-period point values, index 0 = Q1.
    pub linescores: Option<Vec<WireLineScore>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireTeam {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub abbreviation: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireLineScore {
    pub value: Option<f64>,
}
