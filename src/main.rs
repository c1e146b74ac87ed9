//! Entry point: parse CLI, set up logging and run the bot.

use anyhow::Context;
use clap::Parser;
use nba_basketbot::{
    bot::{Dispatcher, Runner, TelegramClient},
    cli::{resolve_token, BotArgs},
    nba::http::BallDontLie,
};
use tracing_subscriber::EnvFilter;

/// Run the bot.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = BotArgs::parse();
    tracing::debug!(
        api_base_url = %args.api_base_url,
        timeout_secs = args.timeout_secs,
        "parsed arguments"
    );

    let token = resolve_token(args.token.clone())?;
    let window = args
        .recent_games_window()
        .context("Invalid recent-games window")?;

    let client = BallDontLie::with_base_url(&args.api_base_url, window)
        .context("Failed to build statistics API client")?;
    let telegram = TelegramClient::with_base_url(&args.telegram_base_url, &token)
        .context("Failed to build Telegram client")?;

    let dispatcher = Dispatcher::new(client, args.conversation_timeout());
    Runner::new(telegram, dispatcher, args.poll_timeout())
        .run()
        .await
        .context("Bot stopped")?;

    Ok(())
}
