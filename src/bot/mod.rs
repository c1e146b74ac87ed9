//! Chat side of the bot: conversation state, dispatch and the Telegram transport.

pub mod conversation;
pub mod dispatcher;
pub mod runner;
pub mod telegram;

pub use conversation::{ConversationState, Conversations, InteractionKind};
pub use dispatcher::Dispatcher;
pub use runner::Runner;
pub use telegram::TelegramClient;
