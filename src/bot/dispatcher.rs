//! Routes inbound chat text to command handlers.

use std::time::{Duration, Instant};

use tracing::info;

use crate::{
    bot::conversation::{Conversations, InteractionKind},
    cli::types::ids::ChatId,
    commands::{
        self,
        common::ReplySink,
        games::handle_recent_games,
        players::{handle_player_game_stats, handle_player_info, handle_season_average},
        Command,
    },
    nba::http::BallDontLie,
    Result,
};

/// Owns the statistics client and every chat's conversation state.
#[derive(Debug)]
pub struct Dispatcher {
    client: BallDontLie,
    conversations: Conversations,
}

impl Dispatcher {
    pub fn new(client: BallDontLie, timeout: Duration) -> Self {
        Self {
            client,
            conversations: Conversations::new(timeout),
        }
    }

    pub fn conversations(&self) -> &Conversations {
        &self.conversations
    }

    /// Answer one inbound text message received at `now`.
    pub async fn handle_text<S: ReplySink>(
        &mut self,
        sink: &mut S,
        chat: ChatId,
        text: &str,
        now: Instant,
    ) -> Result<()> {
        for kind in self.conversations.expire_chat(chat, now) {
            info!(%chat, ?kind, "interaction timed out");
            commands::notify_timeout(sink, chat).await?;
        }

        if commands::looks_like_command(text) {
            return match Command::parse(text) {
                Some(command) => self.run_command(sink, chat, command, now).await,
                None => commands::refer_to_info(sink, chat).await,
            };
        }

        match self.conversations.take_awaiting(chat, now) {
            Some(kind) => self.complete(sink, chat, kind, text.trim()).await,
            None => commands::refer_to_info(sink, chat).await,
        }
    }

    /// Send the timeout notice for every interaction whose timeout elapsed.
    pub async fn expire<S: ReplySink>(&mut self, sink: &mut S, now: Instant) -> Result<()> {
        for (chat, kind) in self.conversations.expire_all(now) {
            info!(%chat, ?kind, "interaction timed out");
            commands::notify_timeout(sink, chat).await?;
        }
        Ok(())
    }

    async fn run_command<S: ReplySink>(
        &mut self,
        sink: &mut S,
        chat: ChatId,
        command: Command,
        now: Instant,
    ) -> Result<()> {
        info!(%chat, ?command, "command received");

        match command {
            Command::Start => commands::handle_start(sink, chat).await,
            Command::Info => commands::handle_info(sink, chat).await,
            Command::Recent => handle_recent_games(&self.client, sink, chat).await,
            Command::Player => self.prompt(sink, chat, InteractionKind::PlayerInfo, now).await,
            Command::Average => {
                self.prompt(sink, chat, InteractionKind::SeasonAverage, now)
                    .await
            }
            Command::Stat => self.prompt(sink, chat, InteractionKind::RecentStat, now).await,
        }
    }

    async fn prompt<S: ReplySink>(
        &mut self,
        sink: &mut S,
        chat: ChatId,
        kind: InteractionKind,
        now: Instant,
    ) -> Result<()> {
        self.conversations.begin(chat, kind, now);
        commands::request_player_name(sink, chat).await
    }

    async fn complete<S: ReplySink>(
        &self,
        sink: &mut S,
        chat: ChatId,
        kind: InteractionKind,
        name: &str,
    ) -> Result<()> {
        match kind {
            InteractionKind::PlayerInfo => handle_player_info(&self.client, sink, chat, name).await,
            InteractionKind::SeasonAverage => {
                handle_season_average(&self.client, sink, chat, name).await
            }
            InteractionKind::RecentStat => {
                handle_player_game_stats(&self.client, sink, chat, name).await
            }
        }
    }
}
