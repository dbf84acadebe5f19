//! Telegram adapter (teloxide).
//!
//! This crate implements the `hsb-core` Notifier port over the Telegram Bot
//! API. Delivery is best-effort from the loop's perspective; rate-limit
//! responses get one retry after the server-suggested delay.

use async_trait::async_trait;

use teloxide::prelude::*;
use tokio::time::sleep;

use hsb_core::{domain::ChatId, errors::Error, ports::Notifier, Result};

#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    pub fn new(token: &str) -> Self {
        Self {
            bot: Bot::new(token),
        }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::Notify(format!("telegram error: {e}"))
    }

    async fn with_retry<T, Fut>(&self, mut op: impl FnMut() -> Fut) -> Result<T>
    where
        Fut: std::future::IntoFuture<Output = std::result::Result<T, teloxide::RequestError>>,
        Fut::IntoFuture: Send,
    {
        const MAX_RETRIES: usize = 1;
        let mut attempts = 0usize;
        loop {
            match op().await {
                Ok(v) => return Ok(v),
                Err(e) => match e {
                    teloxide::RequestError::RetryAfter(d) if attempts < MAX_RETRIES => {
                        attempts += 1;
                        sleep(d).await;
                        continue;
                    }
                    other => return Err(Self::map_err(other)),
                },
            }
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()> {
        let chat = Self::tg_chat(chat_id);
        self.with_retry(|| self.bot.send_message(chat, text))
            .await
            .map(|_| ())
    }
}
