use anyhow::{bail, Context, Result};

use crate::llm_client::{
    ModelSettings, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TOP_P,
};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub gemini_api_base: String,
    pub model: ModelSettings,
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so tests need not touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let google_api_key = lookup("GOOGLE_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .context("Required environment variable 'GOOGLE_API_KEY' is not set")?;

        let temperature = var("LLM_TEMPERATURE", &DEFAULT_TEMPERATURE.to_string())
            .parse::<f32>()
            .context("LLM_TEMPERATURE must be a number")?;
        if !(0.0..=2.0).contains(&temperature) {
            bail!("LLM_TEMPERATURE must be between 0 and 2, got {temperature}");
        }

        let top_p = var("LLM_TOP_P", &DEFAULT_TOP_P.to_string())
            .parse::<f32>()
            .context("LLM_TOP_P must be a number")?;
        if !(top_p > 0.0 && top_p <= 1.0) {
            bail!("LLM_TOP_P must be in (0, 1], got {top_p}");
        }

        Ok(Config {
            google_api_key,
            gemini_api_base: var("GEMINI_API_BASE", DEFAULT_API_BASE),
            model: ModelSettings {
                model: var("GEMINI_MODEL", DEFAULT_MODEL),
                temperature,
                top_p,
            },
            host: var("HOST", "127.0.0.1"),
            port: var("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes: match lookup("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            rust_log: var("RUST_LOG", "info"),
        })
    }
}
