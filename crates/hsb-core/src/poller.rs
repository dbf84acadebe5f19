//! The poll loop: fetch -> validate -> compare -> notify, forever.
//!
//! All loop state (last seen status, last reported error text, the
//! `from_date` cursor) is owned here; nothing is persisted across restarts.
//! Every error raised inside an iteration is caught at the loop boundary,
//! logged, and forwarded to the chat at most once per distinct error text.

use std::sync::Arc;

use chrono::Utc;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::{
    config::Config,
    domain::HomeworkStatus,
    ports::{Notifier, StatusSource},
    response::{check_response, parse_homework},
    Error, Result,
};

pub struct HomeworkPoller {
    cfg: Arc<Config>,
    source: Arc<dyn StatusSource>,
    notifier: Arc<dyn Notifier>,

    last_status: Option<HomeworkStatus>,
    last_error: Option<String>,
    from_date: i64,
}

impl HomeworkPoller {
    pub fn new(cfg: Arc<Config>, source: Arc<dyn StatusSource>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            cfg,
            source,
            notifier,
            last_status: None,
            last_error: None,
            // 0 on the first poll so the current homework is visible even if
            // its status last changed long before the process started.
            from_date: 0,
        }
    }

    /// Run the loop until `shutdown` is cancelled.
    pub async fn run(&mut self, shutdown: CancellationToken) {
        info!(
            interval = ?self.cfg.poll_interval,
            endpoint = %self.cfg.endpoint,
            "homework poller started"
        );

        loop {
            if let Err(err) = self.poll_once().await {
                self.report_failure(&err).await;
            }

            // Advance the cursor after every iteration, success or failure.
            self.from_date = Utc::now().timestamp();

            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("shutdown requested, stopping poller");
                    return;
                }
                _ = sleep(self.cfg.poll_interval) => {}
            }
        }
    }

    /// One iteration: fetch, validate, and notify if the most recent
    /// homework's status differs from the last observation.
    ///
    /// The stored status only advances after the notification is delivered,
    /// so a failed send is retried on the next iteration that still sees the
    /// changed status.
    async fn poll_once(&mut self) -> Result<()> {
        let body = self.source.fetch(self.from_date).await?;
        let homeworks = check_response(&body)?;

        // Newest first, per the API contract. An empty window just means
        // nothing changed since `from_date`.
        let Some(raw) = homeworks.first() else {
            debug!(from_date = self.from_date, "no homework updates");
            return Ok(());
        };

        let homework = parse_homework(raw)?;
        if self.last_status == Some(homework.status) {
            debug!(status = homework.status.as_str(), "status unchanged");
            return Ok(());
        }

        let text = homework.status_message();
        self.notifier.send_text(self.cfg.chat_id, &text).await?;
        info!(
            homework = %homework.name,
            status = homework.status.as_str(),
            "status change notified"
        );
        self.last_status = Some(homework.status);
        Ok(())
    }

    /// Log an iteration failure and forward it to the chat, suppressing the
    /// chat message (but never the log line) when the text matches the
    /// immediately preceding reported error.
    async fn report_failure(&mut self, err: &Error) {
        error!("poll iteration failed: {err}");

        let text = format!("Сбой в работе программы: {err}");
        if self.last_error.as_deref() == Some(text.as_str()) {
            return;
        }
        self.last_error = Some(text.clone());

        if let Err(send_err) = self.notifier.send_text(self.cfg.chat_id, &text).await {
            warn!("failed to report error to chat: {send_err}");
        }
    }
}
