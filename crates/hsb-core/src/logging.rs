use std::{fs::OpenOptions, sync::Mutex};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging for the bot.
///
/// Default: info for our crates, can be overridden with `RUST_LOG`. Primary
/// sink is stderr; when `HSB_LOG_FILE` is set a second plain-text sink is
/// appended to that file. A sink that cannot be opened is skipped rather
/// than blocking startup.
pub fn init(service_name: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("info,hsb_core=info,{service_name}=info")));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(filter).with(stderr_layer);

    let log_file = std::env::var("HSB_LOG_FILE").ok().and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .ok()
    });

    match log_file {
        Some(file) => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry.init(),
    }
}
