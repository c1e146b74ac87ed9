//! Error types for the NBA Basketbot

use thiserror::Error;


pub type Result<T> = std::result::Result<T, BasketbotError>;

#[derive(Error, Debug)]
pub enum BasketbotError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bot token not provided and {env_var} environment variable not set")]
    MissingToken { env_var: String },

    #[error("Invalid UTC offset: {hours} hours")]
    InvalidUtcOffset { hours: i32 },

    #[error("Invalid lookback: {days} days (at most {max})")]
    InvalidLookback { days: u32, max: u32 },

    #[error("Telegram API error: {description}")]
    Telegram { description: String },
}

impl BasketbotError {
    /// Failures of the statistics API that users only ever see as "try again later".
    pub fn is_upstream(&self) -> bool {
        matches!(self, BasketbotError::Http(_) | BasketbotError::Json(_))
    }
}
