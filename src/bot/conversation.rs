//! Per-chat state of the name-prompt interactions.
//!
//! Each command family (`/player`, `/average`, `/stat`) has its own state
//! machine per chat:
//!
//! ```text
//! Idle --command--> AwaitingName --text--> Idle
//!                        |
//!                        +--timeout elapsed--> Idle (timeout notice)
//! ```
//!
//! Time is always passed in by the caller so the machine can be driven with
//! fixed instants.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cli::types::ids::ChatId;

/// Which lookup the awaited player name is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InteractionKind {
    PlayerInfo,
    SeasonAverage,
    RecentStat,
}

impl InteractionKind {
    /// Precedence when more than one interaction waits for the same text.
    pub const ALL: [InteractionKind; 3] = [
        InteractionKind::PlayerInfo,
        InteractionKind::SeasonAverage,
        InteractionKind::RecentStat,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingName {
        since: Instant,
    },
}

impl ConversationState {
    pub fn is_awaiting(&self) -> bool {
        matches!(self, ConversationState::AwaitingName { .. })
    }

    /// Whether `timeout` has elapsed since the prompt was sent.
    pub fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        match self {
            ConversationState::Idle => false,
            ConversationState::AwaitingName { since } => {
                now.saturating_duration_since(*since) >= timeout
            }
        }
    }
}

#[derive(Debug, Default)]
struct Session {
    player_info: ConversationState,
    season_average: ConversationState,
    recent_stat: ConversationState,
}

impl Session {
    fn state(&self, kind: InteractionKind) -> ConversationState {
        match kind {
            InteractionKind::PlayerInfo => self.player_info,
            InteractionKind::SeasonAverage => self.season_average,
            InteractionKind::RecentStat => self.recent_stat,
        }
    }

    fn state_mut(&mut self, kind: InteractionKind) -> &mut ConversationState {
        match kind {
            InteractionKind::PlayerInfo => &mut self.player_info,
            InteractionKind::SeasonAverage => &mut self.season_average,
            InteractionKind::RecentStat => &mut self.recent_stat,
        }
    }

    fn is_idle(&self) -> bool {
        InteractionKind::ALL
            .iter()
            .all(|kind| !self.state(*kind).is_awaiting())
    }

    /// Reset every expired interaction, returning which ones timed out.
    fn expire(&mut self, now: Instant, timeout: Duration) -> Vec<InteractionKind> {
        let mut expired = Vec::new();
        for kind in InteractionKind::ALL {
            let state = self.state_mut(kind);
            if state.is_expired(now, timeout) {
                *state = ConversationState::Idle;
                expired.push(kind);
            }
        }
        expired
    }
}

/// All chats' interaction states. Chats with nothing pending are not stored.
#[derive(Debug)]
pub struct Conversations {
    timeout: Duration,
    sessions: HashMap<ChatId, Session>,
}

impl Conversations {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            sessions: HashMap::new(),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn state(&self, chat: ChatId, kind: InteractionKind) -> ConversationState {
        self.sessions
            .get(&chat)
            .map(|s| s.state(kind))
            .unwrap_or_default()
    }

    /// Number of chats with at least one interaction waiting.
    pub fn active_chats(&self) -> usize {
        self.sessions.len()
    }

    /// Enter `AwaitingName`; an interaction already waiting restarts its clock.
    pub fn begin(&mut self, chat: ChatId, kind: InteractionKind, now: Instant) {
        *self.sessions.entry(chat).or_default().state_mut(kind) =
            ConversationState::AwaitingName { since: now };
        debug!(%chat, ?kind, "awaiting player name");
    }

    /// Hand the next text of `chat` to the first interaction waiting for it.
    ///
    /// That interaction returns to `Idle`. Expired interactions never match;
    /// call [`expire_chat`](Self::expire_chat) first to report them.
    pub fn take_awaiting(&mut self, chat: ChatId, now: Instant) -> Option<InteractionKind> {
        let session = self.sessions.get_mut(&chat)?;
        let timeout = self.timeout;
        let kind = InteractionKind::ALL.into_iter().find(|kind| {
            let state = session.state(*kind);
            state.is_awaiting() && !state.is_expired(now, timeout)
        })?;
        *session.state_mut(kind) = ConversationState::Idle;
        if session.is_idle() {
            self.sessions.remove(&chat);
        }
        debug!(%chat, ?kind, "player name received");
        Some(kind)
    }

    /// Time out the expired interactions of one chat.
    pub fn expire_chat(&mut self, chat: ChatId, now: Instant) -> Vec<InteractionKind> {
        let Some(session) = self.sessions.get_mut(&chat) else {
            return Vec::new();
        };
        let expired = session.expire(now, self.timeout);
        if session.is_idle() {
            self.sessions.remove(&chat);
        }
        expired
    }

    /// Time out the expired interactions of every chat.
    pub fn expire_all(&mut self, now: Instant) -> Vec<(ChatId, InteractionKind)> {
        let mut expired = Vec::new();
        for (chat, session) in self.sessions.iter_mut() {
            expired.extend(
                session
                    .expire(now, self.timeout)
                    .into_iter()
                    .map(|kind| (*chat, kind)),
            );
        }
        self.sessions.retain(|_, session| !session.is_idle());
        expired.sort();
        expired
    }
}
