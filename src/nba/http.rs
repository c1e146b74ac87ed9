//! HTTP client for the balldontlie v1 statistics API.
//!
//! Every call is a single unauthenticated `GET` whose non-2xx status is turned
//! into an error. Nothing is cached and nothing is retried.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::{
    cli::types::{
        ids::{GameId, PlayerId, TeamId},
        time::RecentGamesWindow,
    },
    nba::{
        format::{format_boxscore, format_season_average, no_season_info},
        types::{BoxScore, DataEnvelope, Game, GameRecord, Player, PlayerRecord, SeasonAverage},
    },
    Result,
};


/// Base path for balldontlie API v1.
pub const BDL_BASE_URL: &str = "https://www.balldontlie.io/api/v1";

const USER_AGENT: &str = concat!("nba-basketbot/", env!("CARGO_PKG_VERSION"));

/// Build the `search` term for a player lookup.
///
/// One token (`"Curry"`) or two tokens (`"Stephen Curry"`) are searched as
/// given. Anything else has no sensible search and yields `None`.
pub fn search_term(full_name: &str) -> Option<String> {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    match tokens.as_slice() {
        [name] => Some((*name).to_string()),
        [first, last] => Some(format!("{} {}", first, last)),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct BallDontLie {
    http: Client,
    base_url: String,
    window: RecentGamesWindow,
}

impl BallDontLie {
    pub fn new(window: RecentGamesWindow) -> Result<Self> {
        Self::with_base_url(BDL_BASE_URL, window)
    }

    /// Client pointed at another host (a mirror, or a mock server in tests).
    pub fn with_base_url(base_url: &str, window: RecentGamesWindow) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            window,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, ?params, "balldontlie GET");

        let v = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(serde_json::from_value(v)?)
    }

    /// Search players by name, keeping only those with height and weight on record.
    pub async fn find_players(&self, full_name: &str) -> Result<Vec<Player>> {
        let Some(term) = search_term(full_name) else {
            debug!(name = full_name, "name is not one or two words, skipping search");
            return Ok(Vec::new());
        };

        let envelope: DataEnvelope<PlayerRecord> =
            self.get_json("players", &[("search", term)]).await?;
        Ok(envelope
            .data
            .into_iter()
            .filter_map(Player::from_record)
            .collect())
    }

    /// Current season averages for one player, if the API has any.
    pub async fn season_average(&self, player_id: PlayerId) -> Result<Option<SeasonAverage>> {
        let envelope: DataEnvelope<SeasonAverage> = self
            .get_json("season_averages", &[("player_ids[]", player_id.to_string())])
            .await?;
        Ok(envelope.data.into_iter().next())
    }

    /// Season averages rendered for chat, or the "no info" line.
    pub async fn player_season_average(&self, player: &Player) -> Result<String> {
        Ok(match self.season_average(player.id).await? {
            Some(avg) => format_season_average(player, &avg),
            None => no_season_info(player),
        })
    }

    pub async fn recent_games(&self) -> Result<Vec<Game>> {
        self.recent_games_at(Utc::now()).await
    }

    /// Games inside the recent window around `now` that have tipped off.
    pub async fn recent_games_at(&self, now: DateTime<Utc>) -> Result<Vec<Game>> {
        let (start_date, end_date) = self.window.query_dates(now);
        let envelope: DataEnvelope<GameRecord> = self
            .get_json(
                "games",
                &[("start_date", start_date), ("end_date", end_date)],
            )
            .await?;
        Ok(envelope
            .data
            .into_iter()
            .filter(GameRecord::has_started)
            .map(Game::from)
            .collect())
    }

    /// `(home, visitor)` team IDs of a game.
    pub async fn teams_for_game(&self, game_id: GameId) -> Result<(TeamId, TeamId)> {
        let game: GameRecord = self.get_json(&format!("games/{}", game_id), &[]).await?;
        Ok((game.home_team.id, game.visitor_team.id))
    }

    /// Boxscore line of one player in one game.
    pub async fn player_game_stats(
        &self,
        game_id: GameId,
        player_id: PlayerId,
    ) -> Result<Option<BoxScore>> {
        let envelope: DataEnvelope<BoxScore> = self
            .get_json(
                "stats",
                &[
                    ("game_ids[]", game_id.to_string()),
                    ("player_ids[]", player_id.to_string()),
                ],
            )
            .await?;
        Ok(envelope.data.into_iter().next())
    }

    pub async fn player_stats_for_recent_games(&self, full_name: &str) -> Result<Vec<String>> {
        self.player_stats_for_recent_games_at(full_name, Utc::now())
            .await
    }

    /// Boxscores of every matching player in every recent game their team played.
    ///
    /// Players and recent games are always both fetched, so a failing games
    /// query is an error even when no player matches. Per-game calls follow
    /// one after another; the first failure aborts the whole lookup.
    pub async fn player_stats_for_recent_games_at(
        &self,
        full_name: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<String>> {
        let players = self.find_players(full_name).await?;
        let games = self.recent_games_at(now).await?;
        if players.is_empty() {
            return Ok(Vec::new());
        }

        let mut blocks = Vec::new();
        for game in &games {
            let (home, visitor) = self.teams_for_game(game.id).await?;
            for player in players
                .iter()
                .filter(|p| p.plays_for(home) || p.plays_for(visitor))
            {
                if let Some(stats) = self.player_game_stats(game.id, player.id).await? {
                    blocks.push(format_boxscore(player, game, &stats));
                }
            }
        }

        debug!(
            name = full_name,
            players = players.len(),
            games = games.len(),
            matches = blocks.len(),
            "recent player stats resolved"
        );
        Ok(blocks)
    }
}
