use std::env;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

use nonzero_ext::nonzero;

use crate::error::AppError;
use crate::riot::region::Platform;

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub platform: Platform,
    pub platform_url: Option<String>,
    pub regional_url: Option<String>,
    pub cache_dir: PathBuf,
    pub rate_limit_requests: NonZeroU32,
    pub rate_limit_interval: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        const DEFAULT_PLATFORM: &str = "NA1";
        const DEFAULT_CACHE_DIR: &str = "cache";
        const DEFAULT_RATE_LIMIT_INTERVAL_MS: u64 = 1200;
        const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

        let riot_api_key = env::var("RIOT_API_KEY")
            .map_err(|_| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let platform: Platform = env::var("RIOT_PLATFORM")
            .unwrap_or_else(|_| DEFAULT_PLATFORM.into())
            .parse()?;

        let platform_url = env::var("RIOT_PLATFORM_URL").ok();
        let regional_url = env::var("RIOT_REGIONAL_URL").ok();

        let cache_dir = env::var("CACHE_DIR")
            .unwrap_or_else(|_| DEFAULT_CACHE_DIR.into())
            .into();

        let rate_limit_requests = env::var("RIOT_RATE_LIMIT_REQUESTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroU32::new)
            .unwrap_or(nonzero!(1_u32));

        let rate_limit_interval = env::var("RIOT_RATE_LIMIT_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_RATE_LIMIT_INTERVAL_MS));

        let request_timeout = env::var("RIOT_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));

        Ok(Self {
            riot_api_key,
            platform,
            platform_url,
            regional_url,
            cache_dir,
            rate_limit_requests,
            rate_limit_interval,
            request_timeout,
        })
    }

    /// Settings handed to the API client.
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            api_key: self.riot_api_key.clone(),
            platform_url: self
                .platform_url
                .clone()
                .unwrap_or_else(|| self.platform.base_url()),
            regional_url: self
                .regional_url
                .clone()
                .unwrap_or_else(|| self.platform.to_region().base_url()),
            rate_limit_requests: self.rate_limit_requests,
            rate_limit_interval: self.rate_limit_interval,
            request_timeout: self.request_timeout,
        }
    }
}

/// Everything [`crate::riot::RiotClient`] needs to talk to the Riot API.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub api_key: String,
    /// Base URL for platform routed endpoints (League-v4).
    pub platform_url: String,
    /// Base URL for regional routed endpoints (Account-v1, Match-v5).
    pub regional_url: String,
    pub rate_limit_requests: NonZeroU32,
    pub rate_limit_interval: Duration,
    pub request_timeout: Duration,
}

impl ClientSettings {
    /// Default quota and timeout for the given platform.
    pub fn for_platform(api_key: impl Into<String>, platform: Platform) -> Self {
        Self {
            api_key: api_key.into(),
            platform_url: platform.base_url(),
            regional_url: platform.to_region().base_url(),
            rate_limit_requests: nonzero!(1_u32),
            rate_limit_interval: Duration::from_millis(1200),
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Point both routes at the same host, as a proxy or mock server would.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.platform_url = base_url.clone();
        self.regional_url = base_url;
        self
    }

    pub fn with_rate_limit(mut self, requests: NonZeroU32, interval: Duration) -> Self {
        self.rate_limit_requests = requests;
        self.rate_limit_interval = interval;
        self
    }
}
