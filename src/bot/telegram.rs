//! Minimal Telegram Bot API client: long-polling for updates and sending text.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::{
    cli::types::ids::ChatId, commands::common::ReplySink, error::BasketbotError, Result,
};


/// Base URL of the hosted Bot API.
pub const TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

/// Headroom on top of the long-poll duration before the HTTP request gives up.
const POLL_GRACE: Duration = Duration::from_secs(10);

/// Every Bot API response is wrapped in this envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

impl Update {
    /// Chat and text, when the update is a plain text message.
    pub fn text_message(&self) -> Option<(ChatId, &str)> {
        let message = self.message.as_ref()?;
        let text = message.text.as_deref()?;
        Some((message.chat.id, text))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: ChatId,
}

/// The bot's own account, as returned by `getMe`.
#[derive(Debug, Clone, Deserialize)]
pub struct BotUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    /// `{base}/bot{token}`; never logged.
    api_url: String,
}

impl TelegramClient {
    /// Client for the Bot API at `base_url`, usually [`TELEGRAM_BASE_URL`].
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("nba-basketbot/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            api_url: format!("{}/bot{}", base_url.trim_end_matches('/'), token),
        })
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/{}", self.api_url, method)
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, request: RequestBuilder) -> Result<T> {
        debug!(method, "telegram call");
        let response = request.send().await?;
        let status = response.status();
        // Error replies carry a JSON description, so the body is read regardless of status.
        let body = response.json::<Value>().await?;
        let parsed: ApiResponse<T> = serde_json::from_value(body)?;

        if !parsed.ok {
            return Err(BasketbotError::Telegram {
                description: parsed
                    .description
                    .unwrap_or_else(|| format!("{} failed with status {}", method, status)),
            });
        }
        parsed.result.ok_or_else(|| BasketbotError::Telegram {
            description: format!("{} returned no result", method),
        })
    }

    pub async fn get_me(&self) -> Result<BotUser> {
        let request = self.http.get(self.endpoint("getMe"));
        self.call("getMe", request).await
    }

    /// Long-poll for updates newer than `offset`.
    pub async fn get_updates(&self, offset: Option<i64>, timeout: Duration) -> Result<Vec<Update>> {
        let mut params = vec![("timeout", timeout.as_secs().to_string())];
        if let Some(offset) = offset {
            params.push(("offset", offset.to_string()));
        }
        let request = self
            .http
            .get(self.endpoint("getUpdates"))
            .query(&params)
            .timeout(timeout + POLL_GRACE);
        self.call("getUpdates", request).await
    }

    pub async fn send_message(&self, chat: ChatId, text: &str) -> Result<()> {
        let request = self
            .http
            .post(self.endpoint("sendMessage"))
            .json(&json!({ "chat_id": chat, "text": text }));
        let _sent: Value = self.call("sendMessage", request).await?;
        Ok(())
    }
}

impl ReplySink for TelegramClient {
    async fn send(&mut self, chat: ChatId, text: &str) -> Result<()> {
        self.send_message(chat, text).await
    }
}
