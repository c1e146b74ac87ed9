use crate::cli::types::ids::{GameId, PlayerId, TeamId};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;


/// List endpoints wrap their records in `{"data": [...], "meta": {...}}`.
/// Pagination metadata is not followed, so only `data` is read.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Vec<T>,
}

/// Team as embedded in player and game records
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub conference: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub name: String,
}

/// Raw `/players` item. Retired and obscure players often lack body measurements.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub position: String,
    pub height_feet: Option<u8>,
    pub height_inches: Option<u8>,
    pub weight_pounds: Option<u16>,
    pub team: Team,
}

/// A player with complete height and weight data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub height_feet: u8,
    pub height_inches: u8,
    pub weight_pounds: u16,
    pub team: Team,
}

impl Player {
    /// Keep only records that carry both height and weight.
    pub fn from_record(record: PlayerRecord) -> Option<Self> {
        let height_feet = record.height_feet?;
        let weight_pounds = record.weight_pounds?;
        Some(Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            position: record.position,
            height_feet,
            height_inches: record.height_inches.unwrap_or(0),
            weight_pounds,
            team: record.team,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn plays_for(&self, team_id: TeamId) -> bool {
        self.team.id == team_id
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, position: {}", self.full_name(), self.position)?;
        writeln!(
            f,
            "Team: {}, conference: {}",
            self.team.full_name, self.team.conference
        )?;
        write!(
            f,
            "Height: {}'{}, weight: {} pounds",
            self.height_feet, self.height_inches, self.weight_pounds
        )
    }
}

/// Raw `/games` item
#[derive(Debug, Clone, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    #[serde(default)]
    pub date: String,
    pub home_team: Team,
    pub visitor_team: Team,
    pub home_team_score: u32,
    pub visitor_team_score: u32,
    /// 0 until tip-off
    pub period: u32,
    pub status: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub postseason: bool,
}

impl GameRecord {
    pub fn has_started(&self) -> bool {
        self.period != 0
    }
}

/// A started (live or finished) game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub id: GameId,
    pub home_team: String,
    pub visitor_team: String,
    pub home_team_score: u32,
    pub visitor_team_score: u32,
    pub status: String,
}

impl From<GameRecord> for Game {
    fn from(record: GameRecord) -> Self {
        Self {
            id: record.id,
            home_team: record.home_team.abbreviation,
            visitor_team: record.visitor_team.abbreviation,
            home_team_score: record.home_team_score,
            visitor_team_score: record.visitor_team_score,
            status: record.status,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vs {}", self.home_team, self.visitor_team)?;
        writeln!(f, "{}-{}", self.home_team_score, self.visitor_team_score)?;
        write!(f, "Status: {}", self.status)
    }
}

/// `/season_averages` item.
///
/// Counting stats keep the JSON number as sent so that they render exactly
/// the way the API reported them; the shooting percentages are fractions
/// (0.0..=1.0) and are scaled for display.
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonAverage {
    pub player_id: PlayerId,
    pub season: u16,
    pub games_played: u32,
    pub min: String,
    pub fgm: Number,
    pub fga: Number,
    pub fg3m: Number,
    pub fg3a: Number,
    pub ftm: Number,
    pub fta: Number,
    pub oreb: Number,
    pub dreb: Number,
    pub reb: Number,
    pub ast: Number,
    pub stl: Number,
    pub blk: Number,
    pub turnover: Number,
    pub pts: Number,
    pub fg_pct: f64,
    pub fg3_pct: f64,
    pub ft_pct: f64,
}

/// `/stats` item: one player's boxscore line for one game.
///
/// Players who did not play come back with `null` minutes and shooting numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct BoxScore {
    pub id: u64,
    #[serde(default)]
    pub min: Option<String>,
    #[serde(default)]
    pub pts: Option<Number>,
    #[serde(default)]
    pub fgm: Option<Number>,
    #[serde(default)]
    pub fga: Option<Number>,
    #[serde(default)]
    pub fg3m: Option<Number>,
    #[serde(default)]
    pub fg3a: Option<Number>,
    #[serde(default)]
    pub ftm: Option<Number>,
    #[serde(default)]
    pub fta: Option<Number>,
    #[serde(default)]
    pub oreb: Option<Number>,
    #[serde(default)]
    pub dreb: Option<Number>,
    #[serde(default)]
    pub reb: Option<Number>,
    #[serde(default)]
    pub ast: Option<Number>,
    #[serde(default)]
    pub stl: Option<Number>,
    #[serde(default)]
    pub blk: Option<Number>,
    #[serde(default)]
    pub turnover: Option<Number>,
    #[serde(default)]
    pub fg_pct: Option<Number>,
    #[serde(default)]
    pub fg3_pct: Option<Number>,
    #[serde(default)]
    pub ft_pct: Option<Number>,
}
