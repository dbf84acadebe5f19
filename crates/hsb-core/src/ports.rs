use async_trait::async_trait;

use crate::{domain::ChatId, Result};

/// Port for the remote homework-status API.
///
/// `fetch` returns the decoded JSON body as-is; shape validation happens in
/// `response` so it is testable without any HTTP in the loop.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch homework statuses changed since `from_date` (Unix seconds).
    async fn fetch(&self, from_date: i64) -> Result<serde_json::Value>;
}

/// Port for the outbound chat transport.
///
/// Telegram is the only implementation today; the loop driver only ever
/// sends plain text to one fixed chat.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()>;
}
