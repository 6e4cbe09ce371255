use anyhow::{bail, Context, Result};

use crate::analysis::match_scoring::EmptyRequirementCredit;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Simulated latency applied before every analysis run.
    pub analysis_delay_ms: u64,
    /// Fixed seed for the shared random source. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
    pub empty_requirement_credit: EmptyRequirementCredit,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            analysis_delay_ms: parse_env("ANALYSIS_DELAY_MS", 1500)?,
            rng_seed: optional_env("RNG_SEED")?,
            empty_requirement_credit: parse_credit(
                std::env::var("EMPTY_REQUIREMENT_CREDIT").ok().as_deref(),
            )?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 5 * 1024 * 1024)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(optional_env(key)?.unwrap_or(default))
}

fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        _ => Ok(None),
    }
}

fn parse_credit(raw: Option<&str>) -> Result<EmptyRequirementCredit> {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("full") => Ok(EmptyRequirementCredit::Full),
        Some("none") | Some("zero") => Ok(EmptyRequirementCredit::None),
        Some(other) => bail!("EMPTY_REQUIREMENT_CREDIT must be 'full' or 'none', got '{other}'"),
    }
}
