use std::{env, fs, path::Path, time::Duration};

use crate::{domain::ChatId, errors::Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed configuration for the bot.
///
/// Built once at startup and passed into the poll loop; nothing else reads
/// the environment after this returns.
#[derive(Clone, Debug)]
pub struct Config {
    // Secrets
    pub practicum_token: String,
    pub telegram_token: String,
    pub chat_id: ChatId,

    // Polling
    pub endpoint: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
}

/// Read `.env` into the environment if the file exists.
///
/// Idempotent; already-set variables are never overridden. The binary calls
/// this before logging init so `RUST_LOG`/`HSB_LOG_FILE` from the file take
/// effect, and `Config::load` calls it again for callers that skip that.
pub fn load_dotenv() {
    load_dotenv_if_present(Path::new(".env"));
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv();

        // Required env vars; all three must be non-empty or the process
        // refuses to start.
        let practicum_token = require_env("PRACTICUM_TOKEN")?;
        let telegram_token = require_env("TELEGRAM_TOKEN")?;
        let chat_id = parse_chat_id(&require_env("TELEGRAM_CHAT_ID")?)?;

        let endpoint = env_str("HOMEWORK_ENDPOINT")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let poll_interval = env_u64("POLL_INTERVAL_SECS")
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL);
        let request_timeout = env_u64("REQUEST_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Ok(Self {
            practicum_token,
            telegram_token,
            chat_id,
            endpoint,
            poll_interval,
            request_timeout,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    env_str(key)
        .and_then(non_empty)
        .ok_or_else(|| Error::Config(format!("{key} environment variable is required")))
}

fn parse_chat_id(raw: &str) -> Result<ChatId> {
    raw.trim()
        .parse::<i64>()
        .map(ChatId)
        .map_err(|_| Error::Config(format!("TELEGRAM_CHAT_ID is not a numeric chat id: {raw:?}")))
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keys are unique per test so parallel test threads cannot race on the
    // shared process environment.
    fn unique_key(prefix: &str) -> String {
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        format!("{prefix}_{}_{ts}", std::process::id())
    }

    #[test]
    fn missing_secret_is_a_config_error() {
        let key = unique_key("HSB_TEST_MISSING");
        let err = require_env(&key).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(&key));
    }

    #[test]
    fn whitespace_only_secret_is_a_config_error() {
        let key = unique_key("HSB_TEST_BLANK");
        env::set_var(&key, "   ");
        let err = require_env(&key).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(&key));
        env::remove_var(&key);
    }

    #[test]
    fn present_secret_is_returned() {
        let key = unique_key("HSB_TEST_SET");
        env::set_var(&key, "token");
        assert_eq!(require_env(&key).unwrap(), "token");
        env::remove_var(&key);
    }

    #[test]
    fn dotenv_loader_sets_unset_keys_only() {
        let set_key = unique_key("HSB_TEST_DOTENV_NEW");
        let kept_key = unique_key("HSB_TEST_DOTENV_KEPT");
        env::set_var(&kept_key, "from-env");

        let path = std::env::temp_dir().join(format!("{}.env", unique_key("hsb-dotenv")));
        fs::write(
            &path,
            format!("# comment\n{set_key}=\"quoted\"\n{kept_key}=from-file\n"),
        )
        .unwrap();

        load_dotenv_if_present(&path);

        assert_eq!(env::var(&set_key).unwrap(), "quoted");
        assert_eq!(env::var(&kept_key).unwrap(), "from-env");

        env::remove_var(&set_key);
        env::remove_var(&kept_key);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn chat_id_parses_numeric() {
        assert_eq!(parse_chat_id("123456").unwrap(), ChatId(123456));
        assert_eq!(parse_chat_id(" -100200 ").unwrap(), ChatId(-100200));
    }

    #[test]
    fn chat_id_rejects_garbage() {
        assert!(matches!(parse_chat_id("@my_channel"), Err(Error::Config(_))));
        assert!(matches!(parse_chat_id(""), Err(Error::Config(_))));
    }

    #[test]
    fn non_empty_trims_whitespace_only() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty("token".to_string()), Some("token".to_string()));
    }
}
