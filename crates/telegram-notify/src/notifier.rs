//! One notification attempt: validate, build, send, interpret.

use crate::config::Config;
use crate::error::{NotifyError, Result};
use crate::github;
use crate::telegram::{MessageApi, SendMessageRequest, SendMessageResponse};

/// Positive acknowledgement from the API.
#[derive(Debug, PartialEq, Eq)]
pub struct Delivery {
    pub message_id: i64,
}

/// Execute one notification attempt.
///
/// Validation strictly precedes transmission, and a confirmed `ok`
/// acknowledgement carrying a message id is the only success path. Every
/// outcome is terminal; there are no retries.
pub async fn notify(config: &Config, api: &dyn MessageApi) -> Result<Delivery> {
    if config.token.is_empty() || config.chat_id.is_empty() {
        return Err(NotifyError::config(
            "Telegram Token and Chat ID are required.",
        ));
    }

    let request = SendMessageRequest::from(config);
    github::debug(&format!("Sending message to chat {}", config.chat_id));

    let body = api.send_message(&config.token, &request).await?;

    let response: SendMessageResponse = match serde_json::from_str(&body) {
        Ok(parsed) => parsed,
        // Anything that is not the documented shape is a remote-side problem;
        // hand the raw body back for diagnosis.
        Err(_) => return Err(NotifyError::Rejected(body)),
    };

    match response {
        SendMessageResponse {
            ok: true,
            result: Some(message),
            ..
        } => {
            github::info("Message sent successfully!");
            Ok(Delivery {
                message_id: message.message_id,
            })
        }
        _ => Err(NotifyError::Rejected(body)),
    }
}
