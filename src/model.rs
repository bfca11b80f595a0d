//! Wire types for the season API. Field names mirror the JSON payloads
//! (camelCase); everything is an immutable value object that gets replaced
//! wholesale on refetch.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub team: String,
    pub team_color: String,
    #[serde(default)]
    pub country: Option<String>,
    pub points: f64,
    pub wins: u32,
    pub podiums: u32,
    pub avg_position: f64,
    /// Server-computed percentage; semantics opaque to this client.
    pub consistency: f64,
    /// Server-computed classification; never derived locally.
    pub trend: Trend,
    #[serde(default)]
    pub points_history: Vec<f64>,
    /// Legacy field kept for payloads that predate pointsHistory.
    #[serde(default)]
    pub last_races: Vec<f64>,
    #[serde(default)]
    pub photo: Option<String>,
}

impl Driver {
    /// The one place the pointsHistory → lastRaces fallback lives.
    /// Call sites must not re-implement this rule.
    pub fn points_series(&self) -> &[f64] {
        if !self.points_history.is_empty() {
            &self.points_history
        } else {
            &self.last_races
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    /// 1-based finishing position, unique within a race.
    pub position: u32,
    pub driver_id: String,
    pub driver: String,
    pub team: String,
    #[serde(default)]
    pub grid_position: Option<u32>,
    /// Grid minus finish; positive means positions gained.
    #[serde(default)]
    pub position_change: i32,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub avg_lap_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: String,
    pub name: String,
    pub circuit: String,
    #[serde(default)]
    pub country: Option<String>,
    pub date: String,
    pub round: u32,
    #[serde(default)]
    pub results: Vec<RaceResult>,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// `"<driver name> - <lap time>"`, absent when no lap data exists.
    #[serde(default)]
    pub fastest_lap: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonOverview {
    pub leader: Driver,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub top_momentum: Driver,
    pub falling_driver: Driver,
    pub dominant_team: String,
    pub last_race: Race,
}
