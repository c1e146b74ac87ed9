//! Shared pieces of the command handlers.

use tracing::warn;

use crate::{cli::types::ids::ChatId, error::BasketbotError, Result};

use super::replies::LOOKUP_FAILED;

/// Outbound side of a chat: anything that can deliver a text message.
#[allow(async_fn_in_trait)]
pub trait ReplySink {
    async fn send(&mut self, chat: ChatId, text: &str) -> Result<()>;
}

/// Send every text as its own message, in order.
pub async fn send_each<S, I>(sink: &mut S, chat: ChatId, texts: I) -> Result<()>
where
    S: ReplySink,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for text in texts {
        sink.send(chat, text.as_ref()).await?;
    }
    Ok(())
}

/// A failed statistics lookup is never shown in detail, only logged.
pub async fn report_lookup_failure<S: ReplySink>(
    sink: &mut S,
    chat: ChatId,
    command: &str,
    err: BasketbotError,
) -> Result<()> {
    warn!(%chat, command, error = %err, upstream = err.is_upstream(), "lookup failed");
    sink.send(chat, LOOKUP_FAILED).await
}
