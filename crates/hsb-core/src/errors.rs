/// Core error type for the bot.
///
/// Adapter crates map their specific errors into this type so the poll loop
/// can handle failures consistently (fatal at startup vs retryable in-loop).
/// Every variant except `Config` is recoverable: the loop logs it and moves
/// on to the next iteration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("bad response shape: {0}")]
    Shape(String),

    #[error("bad homework data: {0}")]
    Data(String),

    #[error("notify error: {0}")]
    Notify(String),
}

pub type Result<T> = std::result::Result<T, Error>;
