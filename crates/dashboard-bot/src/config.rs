//! Service Configuration

use std::path::PathBuf;

use anyhow::Context;

/// Everything the service reads from the environment, captured once at
/// startup and passed down explicitly.
#[derive(Clone, Debug)]
pub struct BotConfig {
    /// Bot API credential
    pub bot_token: String,

    /// Chat the report is delivered to
    pub chat_id: String,

    /// Listen address for the webhook service
    pub bind_addr: String,

    /// Directory holding the three input tables
    pub portfolio_dir: PathBuf,
}

impl BotConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bot_token = std::env::var("BOT_TOKEN").context("BOT_TOKEN is not set")?;
        let chat_id = std::env::var("CHAT_ID").context("CHAT_ID is not set")?;
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
        let portfolio_dir = std::env::var("PORTFOLIO_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("portfolio"));

        Ok(Self {
            bot_token,
            chat_id,
            bind_addr,
            portfolio_dir,
        })
    }
}
