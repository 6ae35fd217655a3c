// src/services/telegram.rs

//! Telegram delivery service.
//!
//! Sends digest messages through the Bot API `sendMessage` method, one
//! request per message, strictly in order. Messages are rendered with
//! `parse_mode = "HTML"` (bold, italic, hyperlink subset). No retries:
//! a failed send surfaces as an error and the run stops.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::error::{AppError, Result};
use crate::models::{CrawlerConfig, TelegramConfig};
use crate::utils::http;

/// Destination for assembled digest messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver messages sequentially, preserving order.
    async fn send(&self, messages: &[String]) -> Result<()>;
}

/// Notifier backed by the Telegram Bot API.
pub struct TelegramNotifier {
    client: Client,
    endpoint: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Create a notifier from crawler and Telegram configuration.
    pub fn new(crawler: &CrawlerConfig, telegram: &TelegramConfig) -> Result<Self> {
        if telegram.bot_token.trim().is_empty() {
            return Err(AppError::config("telegram.bot_token is empty"));
        }
        if telegram.chat_id.trim().is_empty() {
            return Err(AppError::config("telegram.chat_id is empty"));
        }

        Ok(Self {
            client: http::create_client(crawler)?,
            endpoint: format!(
                "{}/bot{}/sendMessage",
                telegram.api_base.trim_end_matches('/'),
                telegram.bot_token
            ),
            chat_id: telegram.chat_id.clone(),
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, messages: &[String]) -> Result<()> {
        for message in messages {
            let body = json!({
                "chat_id": self.chat_id,
                "text": message,
                "parse_mode": "HTML",
                "disable_web_page_preview": true,
            });

            let response = self.client.post(&self.endpoint).json(&body).send().await?;
            let status = response.status();
            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                return Err(AppError::notify(status.as_u16(), text));
            }

            log::debug!("Sent message of {} chars", message.chars().count());
        }
        Ok(())
    }
}

/// Notifier that logs messages instead of delivering them.
#[derive(Debug, Default)]
pub struct DryRunNotifier;

#[async_trait]
impl Notifier for DryRunNotifier {
    async fn send(&self, messages: &[String]) -> Result<()> {
        for (n, message) in messages.iter().enumerate() {
            log::info!(
                "[dry-run] message {}/{} ({} chars):\n{}",
                n + 1,
                messages.len(),
                message.chars().count(),
                message
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_missing_token() {
        let crawler = CrawlerConfig::default();
        let telegram = TelegramConfig::default();
        assert!(TelegramNotifier::new(&crawler, &telegram).is_err());
    }

    #[test]
    fn test_endpoint_format() {
        let crawler = CrawlerConfig::default();
        let telegram = TelegramConfig {
            api_base: "https://api.telegram.org/".to_string(),
            bot_token: "123:abc".to_string(),
            chat_id: "42".to_string(),
        };

        let notifier = TelegramNotifier::new(&crawler, &telegram).unwrap();
        assert_eq!(
            notifier.endpoint,
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[tokio::test]
    async fn test_dry_run_accepts_messages() {
        let notifier = DryRunNotifier;
        assert!(notifier.send(&["hello".to_string()]).await.is_ok());
    }
}
