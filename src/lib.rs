//! NBA Basketbot Library
//!
//! A Telegram bot that answers questions about NBA players and games using the
//! public [balldontlie](https://www.balldontlie.io) statistics API.
//!
//! ## Features
//!
//! - **Player Info**: `/player` then a name shows position, team, height and weight
//! - **Season Averages**: `/average` then a name shows the current season averages
//! - **Recent Games**: `/recent` lists games from the last day, live ones included
//! - **Recent Boxscores**: `/stat` then a name shows that player's lines in recent games
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_basketbot::{nba::http::BallDontLie, RecentGamesWindow};
//!
//! # async fn example() -> nba_basketbot::Result<()> {
//! let client = BallDontLie::new(RecentGamesWindow::default())?;
//! for player in client.find_players("Stephen Curry").await? {
//!     println!("{}", player);
//!     println!("{}", client.player_season_average(&player).await?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the bot token to avoid passing it on the command line:
//! ```bash
//! export NBA_BASKETBOT_TOKEN=123456:ABC-DEF
//! ```

pub mod bot;
pub mod cli;
pub mod commands;
pub mod error;
pub mod nba;

// Re-export commonly used types
pub use cli::types::ids::{ChatId, GameId, PlayerId, TeamId};
pub use cli::types::time::RecentGamesWindow;
pub use error::{BasketbotError, Result};
pub use nba::types::{Game, Player, Team};

pub const TOKEN_ENV_VAR: &str = "NBA_BASKETBOT_TOKEN";
