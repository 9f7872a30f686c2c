use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

/// Typed configuration for the bot.
#[derive(Clone, Debug)]
pub struct Config {
    // Core
    pub telegram_bot_token: String,

    // Content provider
    pub api_base_url: String,
    pub request_timeout: Duration,

    // Editions
    pub script_edition: String,
    pub reciter_edition: String,
    pub reciter_name: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let telegram_bot_token = env_str("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        if telegram_bot_token.trim().is_empty() {
            return Err(Error::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let api_base_url = env_str("QURAN_API_BASE_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| "https://api.alquran.cloud/v1".to_string());
        let request_timeout =
            Duration::from_millis(env_u64("QURAN_API_TIMEOUT_MS").unwrap_or(15_000));

        let script_edition = env_str("SCRIPT_EDITION")
            .and_then(non_empty)
            .unwrap_or_else(|| "quran-simple".to_string());
        let reciter_edition = env_str("RECITER_EDITION")
            .and_then(non_empty)
            .unwrap_or_else(|| "ar.alafasy".to_string());
        let reciter_name = env_str("RECITER_NAME")
            .and_then(non_empty)
            .unwrap_or_else(|| "Mishary Rashid Alafasy".to_string());

        Ok(Self {
            telegram_bot_token,
            api_base_url,
            request_timeout,
            script_edition,
            reciter_edition,
            reciter_name,
        })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
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
