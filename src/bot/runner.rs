//! Long-polling loop tying the Telegram transport to the dispatcher.

use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::{
    bot::{dispatcher::Dispatcher, telegram::TelegramClient},
    Result,
};

/// Pause after a failed poll before trying again.
const RETRY_DELAY: Duration = Duration::from_secs(5);

pub struct Runner {
    telegram: TelegramClient,
    dispatcher: Dispatcher,
    poll_timeout: Duration,
    offset: Option<i64>,
}

impl Runner {
    pub fn new(telegram: TelegramClient, dispatcher: Dispatcher, poll_timeout: Duration) -> Self {
        Self {
            telegram,
            dispatcher,
            poll_timeout,
            offset: None,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Fetch one batch of updates, answer each text message in order, then
    /// time out stale interactions. Returns how many messages were handled.
    pub async fn poll_once(&mut self) -> Result<usize> {
        let updates = self
            .telegram
            .get_updates(self.offset, self.poll_timeout)
            .await?;

        let mut handled = 0;
        for update in updates {
            // Acknowledge even if answering fails, so one bad message is not redelivered forever.
            self.offset = Some(update.update_id + 1);
            let Some((chat, text)) = update.text_message() else {
                continue;
            };
            if let Err(e) = self
                .dispatcher
                .handle_text(&mut self.telegram, chat, text, Instant::now())
                .await
            {
                error!(%chat, error = %e, "failed to answer message");
            }
            handled += 1;
        }

        self.dispatcher
            .expire(&mut self.telegram, Instant::now())
            .await?;
        Ok(handled)
    }

    /// Verify the token, then poll until the process is stopped.
    pub async fn run(mut self) -> Result<()> {
        let me = self.telegram.get_me().await?;
        info!(
            bot = me.username.as_deref().unwrap_or(&me.first_name),
            bot_id = me.id,
            timeout_secs = self.dispatcher.conversations().timeout().as_secs(),
            "bot started, polling for updates"
        );

        loop {
            if let Err(e) = self.poll_once().await {
                error!(error = %e, "polling failed, retrying");
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }
}
