use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use hsb_core::{config::Config, poller::HomeworkPoller};
use hsb_practicum::PracticumClient;
use hsb_telegram::TelegramNotifier;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env` first so RUST_LOG / HSB_LOG_FILE set there reach logging init.
    hsb_core::config::load_dotenv();
    hsb_core::logging::init("hsb");

    // Missing configuration is the only fatal failure: log it and exit
    // non-zero before any network client exists.
    let cfg = match Config::load() {
        Ok(cfg) => Arc::new(cfg),
        Err(err) => {
            tracing::error!("{err}, shutting down");
            std::process::exit(1);
        }
    };

    // A client that cannot be built is as fatal as missing configuration;
    // still no network traffic has happened at this point.
    let source = match PracticumClient::new(&cfg) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            tracing::error!("{err}, shutting down");
            std::process::exit(1);
        }
    };
    let notifier = Arc::new(TelegramNotifier::new(&cfg.telegram_token));

    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                shutdown.cancel();
            }
        }
    });

    let mut poller = HomeworkPoller::new(cfg, source, notifier);
    poller.run(shutdown).await;

    Ok(())
}
