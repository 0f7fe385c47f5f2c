//! Server configuration.
//!
//! Every setting has a command-line flag, most also read an environment
//! variable (`PORT` keeps the convention of container platforms).

use std::time::Duration;

use chrono::TimeDelta;
use clap::Parser;

use crate::cache::{Clock, TierCache, DAILY_TIER, HOURLY_TIER};
use crate::fetch::{HttpPageSource, DEFAULT_SOURCE_URL};
use crate::{Error, Options, Result};

/// Settings for the word-of-the-day server.
#[derive(Debug, Clone, Parser)]
#[command(name = "mot_du_jour", about = "French word of the day, from Wiktionary", version)]
pub struct ServerConfig {
    /// Bind address
    #[arg(long, env = "MOT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// HTTP port
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Page to fetch for every refresh
    #[arg(long, env = "MOT_SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
    pub source_url: String,

    /// Language section to extract
    #[arg(long, env = "MOT_LANGUAGE", default_value = "French")]
    pub language: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "MOT_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Lifetime of the daily word in seconds
    #[arg(long, env = "MOT_DAILY_TTL_SECS", default_value_t = 86_400)]
    pub daily_ttl_secs: u64,

    /// Lifetime of the hourly word in seconds
    #[arg(long, env = "MOT_HOURLY_TTL_SECS", default_value_t = 3_600)]
    pub hourly_ttl_secs: u64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            source_url: DEFAULT_SOURCE_URL.to_string(),
            language: "French".to_string(),
            request_timeout_secs: 10,
            daily_ttl_secs: 86_400,
            hourly_ttl_secs: 3_600,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind the listener to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Extraction options for the configured language.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            language: self.language.clone(),
            ..Options::default()
        }
    }

    /// HTTP source for the configured URL and timeout.
    pub fn page_source(&self) -> Result<HttpPageSource> {
        HttpPageSource::from_url_str(
            &self.source_url,
            Duration::from_secs(self.request_timeout_secs),
        )
    }

    /// Cache with the daily and hourly tiers.
    pub fn tier_cache<C: Clock>(&self, clock: C) -> Result<TierCache<C>> {
        Ok(TierCache::with_clock(clock)
            .with_tier(DAILY_TIER, ttl(self.daily_ttl_secs)?)
            .with_tier(HOURLY_TIER, ttl(self.hourly_ttl_secs)?))
    }
}

fn ttl(secs: u64) -> Result<TimeDelta> {
    i64::try_from(secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .ok_or_else(|| Error::Config(format!("ttl of {secs}s is out of range")))
}
