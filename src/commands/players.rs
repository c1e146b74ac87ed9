//! Player lookups that follow a name prompt: `/player`, `/average`, `/stat`.

use tracing::info;

use crate::{cli::types::ids::ChatId, nba::http::BallDontLie, Result};

use super::{
    common::{report_lookup_failure, send_each, ReplySink},
    replies::{
        EASTER_EGG_NAME, EASTER_EGG_REPLY, NO_PLAYER_FOUND, NO_PLAYER_GAME_FOUND, PLEASE_WAIT,
        PLEASE_WAIT_LONGER,
    },
};

/// Canned answer for the one name that is never searched. Exact match only;
/// the dispatcher trims surrounding whitespace before it gets here.
pub fn easter_egg(name: &str) -> Option<&'static str> {
    (name == EASTER_EGG_NAME).then_some(EASTER_EGG_REPLY)
}

/// `/player`: basic bio of every player matching the name.
pub async fn handle_player_info<S: ReplySink>(
    client: &BallDontLie,
    sink: &mut S,
    chat: ChatId,
    name: &str,
) -> Result<()> {
    sink.send(chat, PLEASE_WAIT).await?;

    if let Some(joke) = easter_egg(name) {
        return sink.send(chat, joke).await;
    }

    match client.find_players(name).await {
        Ok(players) if players.is_empty() => sink.send(chat, NO_PLAYER_FOUND).await,
        Ok(players) => {
            info!(%chat, name, count = players.len(), "sending player info");
            send_each(sink, chat, players.iter().map(ToString::to_string)).await
        }
        Err(e) => report_lookup_failure(sink, chat, "player", e).await,
    }
}

/// `/average`: current season averages, one message per matching player.
pub async fn handle_season_average<S: ReplySink>(
    client: &BallDontLie,
    sink: &mut S,
    chat: ChatId,
    name: &str,
) -> Result<()> {
    sink.send(chat, PLEASE_WAIT).await?;

    let players = match client.find_players(name).await {
        Ok(players) => players,
        Err(e) => return report_lookup_failure(sink, chat, "average", e).await,
    };
    if players.is_empty() {
        return sink.send(chat, NO_PLAYER_FOUND).await;
    }

    // Each block goes out as soon as it is fetched.
    for player in &players {
        match client.player_season_average(player).await {
            Ok(text) => sink.send(chat, &text).await?,
            Err(e) => return report_lookup_failure(sink, chat, "average", e).await,
        }
    }
    Ok(())
}

/// `/stat`: boxscores of matching players in recently played games.
pub async fn handle_player_game_stats<S: ReplySink>(
    client: &BallDontLie,
    sink: &mut S,
    chat: ChatId,
    name: &str,
) -> Result<()> {
    sink.send(chat, PLEASE_WAIT_LONGER).await?;

    match client.player_stats_for_recent_games(name).await {
        Ok(blocks) if blocks.is_empty() => sink.send(chat, NO_PLAYER_GAME_FOUND).await,
        Ok(blocks) => send_each(sink, chat, blocks).await,
        Err(e) => report_lookup_failure(sink, chat, "stat", e).await,
    }
}
