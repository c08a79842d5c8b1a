use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ParseMode, Recipient},
};
use tracing::{debug, info};

use common::{Error, Notifier, Result};

/// Sends reports to a single Telegram chat or channel with Markdown formatting.
pub struct TelegramNotifier {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramNotifier {
    pub fn new(token: impl Into<String>, chat_id: &str) -> Self {
        let recipient = parse_recipient(chat_id);
        info!(recipient = ?recipient, "Telegram delivery configured");
        Self {
            bot: Bot::new(token),
            recipient,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        self.bot
            .send_message(self.recipient.clone(), text)
            .parse_mode(ParseMode::Markdown)
            .await
            .map_err(|e| Error::Delivery(e.to_string()))?;
        debug!("Telegram message sent");
        Ok(())
    }
}

/// Numeric ids address chats directly; anything else is a channel username.
pub fn parse_recipient(chat_id: &str) -> Recipient {
    let chat_id = chat_id.trim();
    match chat_id.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) if chat_id.starts_with('@') => Recipient::ChannelUsername(chat_id.to_string()),
        Err(_) => Recipient::ChannelUsername(format!("@{chat_id}")),
    }
}

/// Fallback used when no Telegram credentials are configured.
/// Reports only go to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        info!(report = %text, "Telegram not configured, report logged only");
        Ok(())
    }
}
