//! Telegram Bot API wire types and transport.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{NotifyError, Result};

const API_BASE: &str = "https://api.telegram.org";

/// `sendMessage` request body.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: String,
    pub disable_notification: bool,
    pub disable_web_page_preview: bool,
}

impl From<&Config> for SendMessageRequest {
    fn from(config: &Config) -> Self {
        Self {
            chat_id: config.chat_id.clone(),
            text: config.message.clone(),
            parse_mode: config.parse_mode.clone(),
            disable_notification: config.disable_notification,
            disable_web_page_preview: config.disable_web_preview,
        }
    }
}

/// `sendMessage` response body. Unknown fields are tolerated.
#[derive(Debug, Deserialize)]
pub struct SendMessageResponse {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<SentMessage>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SentMessage {
    pub message_id: i64,
}

/// Transport boundary for the one API call this step makes.
///
/// Implementations return the raw response body for any completed HTTP
/// exchange, whatever its status code, so the caller can surface the remote
/// payload verbatim when the API rejects the request. `Transport` errors are
/// reserved for exchanges that never produced a body.
#[async_trait]
pub trait MessageApi: Send + Sync {
    async fn send_message(&self, token: &str, request: &SendMessageRequest) -> Result<String>;
}

/// reqwest-backed transport against the live API.
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new() -> Self {
        // TELEGRAM_API_BASE override keeps end-to-end tests off the live API.
        let base = std::env::var("TELEGRAM_API_BASE").unwrap_or_else(|_| API_BASE.to_string());
        Self::with_base_url(base)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageApi for HttpApi {
    async fn send_message(&self, token: &str, request: &SendMessageRequest) -> Result<String> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, token);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(sanitize)?;
        response.text().await.map_err(sanitize)
    }
}

/// reqwest errors render their URL, and ours embeds the bot token; strip it.
fn sanitize(err: reqwest::Error) -> NotifyError {
    NotifyError::transport(err.without_url().to_string())
}
