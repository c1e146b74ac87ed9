//! CLI argument definitions and parsing.

pub mod types;

use std::time::Duration;

use clap::Parser;
use types::time::{
    RecentGamesWindow, DEFAULT_LOOKBACK_DAYS, DEFAULT_UTC_OFFSET_HOURS, MAX_LOOKBACK_DAYS,
};

use crate::{
    bot::telegram::TELEGRAM_BASE_URL, error::BasketbotError, nba::http::BDL_BASE_URL, Result,
    TOKEN_ENV_VAR,
};

/// Longest accepted wait for a player name, one day.
pub const MAX_TIMEOUT_SECS: u64 = 86_400;

/// Telegram bot answering questions about NBA players and games.
#[derive(Debug, Parser)]
#[clap(name = "nba-basketbot", about = "NBA Basketbot for Telegram")]
pub struct BotArgs {
    /// Bot access token (or set `NBA_BASKETBOT_TOKEN` env var).
    #[clap(long)]
    pub token: Option<String>,

    /// Base URL of the balldontlie statistics API.
    #[clap(long, default_value = BDL_BASE_URL)]
    pub api_base_url: String,

    /// Base URL of the Telegram Bot API.
    #[clap(long, default_value = TELEGRAM_BASE_URL)]
    pub telegram_base_url: String,

    /// Seconds to wait for a player name before giving up on the interaction.
    #[clap(
        long,
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..=MAX_TIMEOUT_SECS)
    )]
    pub timeout_secs: u64,

    /// Long-poll duration in seconds when waiting for new messages.
    #[clap(long, default_value_t = 10)]
    pub poll_secs: u64,

    /// Timezone of the recent-games window, in whole hours from UTC.
    #[clap(long, default_value_t = DEFAULT_UTC_OFFSET_HOURS, allow_negative_numbers = true)]
    pub utc_offset_hours: i32,

    /// Number of days the recent-games window reaches back.
    #[clap(
        long,
        default_value_t = DEFAULT_LOOKBACK_DAYS,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_LOOKBACK_DAYS))
    )]
    pub lookback_days: u32,
}

impl BotArgs {
    pub fn conversation_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.poll_secs)
    }

    pub fn recent_games_window(&self) -> Result<RecentGamesWindow> {
        RecentGamesWindow::from_hours(self.utc_offset_hours, self.lookback_days)
    }
}

/// Pick the bot token: explicit flag first, then `NBA_BASKETBOT_TOKEN`.
pub fn resolve_token(token: Option<String>) -> Result<String> {
    token
        .filter(|t| !t.trim().is_empty())
        .or_else(|| {
            std::env::var(TOKEN_ENV_VAR)
                .ok()
                .filter(|t| !t.trim().is_empty())
        })
        .ok_or_else(|| BasketbotError::MissingToken {
            env_var: TOKEN_ENV_VAR.to_string(),
        })
}
