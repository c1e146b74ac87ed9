//! Command implementations for the NBA Basketbot
//!
//! Each handler performs its lookups in sequence and answers with one chat
//! message per result. Failed lookups are answered with a single generic
//! message; nothing is retried.

pub mod common;
pub mod games;
pub mod players;
pub mod replies;

use crate::{cli::types::ids::ChatId, Result};

use common::ReplySink;

/// Slash commands understood by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Info,
    Recent,
    Player,
    Average,
    Stat,
}

impl Command {
    /// Parse the leading `/command` of a message.
    ///
    /// Group chats address bots as `/command@BotName`; the suffix is ignored.
    /// Returns `None` for plain text and for unknown commands.
    pub fn parse(text: &str) -> Option<Self> {
        let word = text.split_whitespace().next()?.strip_prefix('/')?;
        let name = word.split('@').next().unwrap_or(word);
        match name {
            "start" => Some(Command::Start),
            "info" => Some(Command::Info),
            "recent" => Some(Command::Recent),
            "player" => Some(Command::Player),
            "average" => Some(Command::Average),
            "stat" => Some(Command::Stat),
            _ => None,
        }
    }
}

/// Messages that start with `/` are commands, known or not.
pub fn looks_like_command(text: &str) -> bool {
    text.trim_start().starts_with('/')
}

pub async fn handle_start<S: ReplySink>(sink: &mut S, chat: ChatId) -> Result<()> {
    sink.send(chat, replies::GREETING).await
}

pub async fn handle_info<S: ReplySink>(sink: &mut S, chat: ChatId) -> Result<()> {
    sink.send(chat, replies::COMMAND_INFO).await
}

pub async fn refer_to_info<S: ReplySink>(sink: &mut S, chat: ChatId) -> Result<()> {
    sink.send(chat, replies::REFER_TO_INFO).await
}

pub async fn request_player_name<S: ReplySink>(sink: &mut S, chat: ChatId) -> Result<()> {
    sink.send(chat, replies::ASK_PLAYER_NAME).await
}

pub async fn notify_timeout<S: ReplySink>(sink: &mut S, chat: ChatId) -> Result<()> {
    sink.send(chat, replies::TIMEOUT_NOTICE).await
}
