//! `/recent`: games finished within the lookback window, plus live ones.

use tracing::info;

use crate::{cli::types::ids::ChatId, nba::http::BallDontLie, Result};

use super::{
    common::{report_lookup_failure, send_each, ReplySink},
    replies::{NO_RECENT_GAMES, PLEASE_WAIT},
};

pub async fn handle_recent_games<S: ReplySink>(
    client: &BallDontLie,
    sink: &mut S,
    chat: ChatId,
) -> Result<()> {
    sink.send(chat, PLEASE_WAIT).await?;

    match client.recent_games().await {
        Ok(games) if games.is_empty() => sink.send(chat, NO_RECENT_GAMES).await,
        Ok(games) => {
            info!(%chat, count = games.len(), "sending recent games");
            send_each(sink, chat, games.iter().map(ToString::to_string)).await
        }
        Err(e) => report_lookup_failure(sink, chat, "recent", e).await,
    }
}
