//! Typed configuration for one notification attempt.
//!
//! All parsing and validation happens here, once, at construction. The rest
//! of the crate only ever sees a fully-populated `Config`.

use crate::cli::SendArgs;
use crate::error::{NotifyError, Result};
use crate::github;

pub const DEFAULT_MESSAGE: &str = "Security alert detected!";
pub const DEFAULT_PARSE_MODE: &str = "Markdown";

/// Loosely-typed values as read from the pipeline boundary.
#[derive(Debug, Default)]
pub struct RawInputs {
    pub token: Option<String>,
    pub chat_id: Option<String>,
    pub message: Option<String>,
    pub parse_mode: Option<String>,
    pub disable_notification: Option<String>,
    pub disable_web_preview: Option<String>,
}

impl RawInputs {
    /// Collect the step inputs from the runner environment.
    pub fn from_env() -> Self {
        Self {
            token: github::input("telegram-token"),
            chat_id: github::input("telegram-chat-id"),
            message: github::input("message"),
            parse_mode: github::input("parse-mode"),
            disable_notification: github::input("disable-notification"),
            disable_web_preview: github::input("disable-web-preview"),
        }
    }

    /// Command-line flags take precedence over runner-provided inputs.
    pub fn merge_cli(mut self, args: &SendArgs) -> Self {
        if args.token.is_some() {
            self.token = args.token.clone();
        }
        if args.chat_id.is_some() {
            self.chat_id = args.chat_id.clone();
        }
        if args.message.is_some() {
            self.message = args.message.clone();
        }
        if args.parse_mode.is_some() {
            self.parse_mode = args.parse_mode.clone();
        }
        if args.disable_notification {
            self.disable_notification = Some("true".to_string());
        }
        if args.disable_web_preview {
            self.disable_web_preview = Some("true".to_string());
        }
        self
    }
}

/// Immutable configuration for a single invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub chat_id: String,
    pub message: String,
    pub parse_mode: String,
    pub disable_notification: bool,
    pub disable_web_preview: bool,
}

impl Config {
    /// Apply defaults and validate. Fails before any network activity when a
    /// required field is missing; no format checks beyond non-emptiness.
    pub fn from_inputs(raw: RawInputs) -> Result<Self> {
        let token = raw.token.unwrap_or_default();
        let chat_id = raw.chat_id.unwrap_or_default();
        if token.is_empty() || chat_id.is_empty() {
            return Err(NotifyError::config(
                "Telegram Token and Chat ID are required.",
            ));
        }

        Ok(Self {
            token,
            chat_id,
            message: raw
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            parse_mode: raw
                .parse_mode
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_PARSE_MODE.to_string()),
            disable_notification: parse_flag(raw.disable_notification.as_deref()),
            disable_web_preview: parse_flag(raw.disable_web_preview.as_deref()),
        })
    }
}

/// Only the literal string "true" sets a flag; anything else is false,
/// matching the documented input contract.
fn parse_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn required() -> RawInputs {
        RawInputs {
            token: Some("123456:ABC".to_string()),
            chat_id: Some("-1000123".to_string()),
            ..RawInputs::default()
        }
    }

    #[test]
    fn defaults_applied_when_optional_inputs_absent() {
        let cfg = Config::from_inputs(required()).unwrap();
        assert_eq!(cfg.message, DEFAULT_MESSAGE);
        assert_eq!(cfg.parse_mode, DEFAULT_PARSE_MODE);
        assert!(!cfg.disable_notification);
        assert!(!cfg.disable_web_preview);
    }

    #[test]
    fn explicit_values_survive_untouched() {
        let mut raw = required();
        raw.message = Some("build 1234 failed".to_string());
        raw.parse_mode = Some("HTML".to_string());
        let cfg = Config::from_inputs(raw).unwrap();
        assert_eq!(cfg.chat_id, "-1000123");
        assert_eq!(cfg.message, "build 1234 failed");
        assert_eq!(cfg.parse_mode, "HTML");
    }

    #[test]
    fn missing_token_errors() {
        let raw = RawInputs {
            chat_id: Some("-1000123".to_string()),
            ..RawInputs::default()
        };
        let err = Config::from_inputs(raw).unwrap_err();
        assert_matches!(err, NotifyError::Config(_));
        assert_eq!(err.to_string(), "Telegram Token and Chat ID are required.");
    }

    #[test]
    fn missing_chat_id_errors() {
        let raw = RawInputs {
            token: Some("123456:ABC".to_string()),
            ..RawInputs::default()
        };
        assert_matches!(
            Config::from_inputs(raw).unwrap_err(),
            NotifyError::Config(_)
        );
    }

    #[test]
    fn flag_inputs_only_accept_the_literal_true() {
        for (value, expected) in [
            ("true", true),
            ("false", false),
            ("yes", false),
            ("TRUE", false),
            ("1", false),
        ] {
            let mut raw = required();
            raw.disable_notification = Some(value.to_string());
            raw.disable_web_preview = Some(value.to_string());
            let cfg = Config::from_inputs(raw).unwrap();
            assert_eq!(cfg.disable_notification, expected, "input {value:?}");
            assert_eq!(cfg.disable_web_preview, expected, "input {value:?}");
        }
    }

    #[test]
    fn cli_flags_override_runner_inputs() {
        let args = SendArgs {
            message: Some("from the flag".to_string()),
            disable_notification: true,
            ..SendArgs::default()
        };
        let mut raw = required();
        raw.message = Some("from the runner".to_string());
        let cfg = Config::from_inputs(raw.merge_cli(&args)).unwrap();
        assert_eq!(cfg.message, "from the flag");
        assert!(cfg.disable_notification);
        assert!(!cfg.disable_web_preview);
    }
}
