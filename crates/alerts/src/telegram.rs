//! Telegram delivery for volume alerts.
//!
//! Credentials come from the environment; without them every send is a
//! silent no-op so the watcher can run without a bot configured.

use serde_json::json;
use tracing::{info, warn};

/// Telegram bot credentials.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

impl TelegramConfig {
    /// Read credentials from TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID.
    /// Returns None when either is unset or empty.
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok()?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID").ok()?;

        if bot_token.is_empty() || chat_id.is_empty() {
            return None;
        }

        Some(Self { bot_token, chat_id })
    }
}

/// Sends alert messages through the Telegram bot API.
pub struct TelegramNotifier {
    config: TelegramConfig,
    http_client: reqwest::Client,
}

impl TelegramNotifier {
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Try to build a notifier from the environment.
    pub fn from_env() -> Option<Self> {
        match TelegramConfig::from_env() {
            Some(config) => {
                info!(
                    "telegram alerts enabled (chat_id: {})",
                    &config.chat_id[..config.chat_id.len().min(6)]
                );
                Some(Self::new(config))
            }
            None => {
                info!("telegram alerts disabled (TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set)");
                None
            }
        }
    }

    /// Send a message, best effort. Delivery failures are logged and
    /// swallowed; the console summary has already been written.
    pub async fn send(&self, text: &str) {
        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.config.bot_token
        );

        let payload = json!({
            "chat_id": self.config.chat_id,
            "text": text,
            "parse_mode": "HTML",
            "disable_web_page_preview": true,
        });

        match self.http_client.post(&url).json(&payload).send().await {
            Ok(response) if !response.status().is_success() => {
                warn!(
                    "telegram API returned non-success status: {}",
                    response.status()
                );
            }
            Ok(_) => {}
            Err(e) => warn!("failed to send telegram alert: {}", e),
        }
    }
}
