use std::sync::Arc;

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::config::ClientSettings;
use crate::error::AppError;

use super::metrics::RequestMetrics;
use super::rate_gate::RateGate;
use super::retry::{self, MAX_ATTEMPTS};

const TOKEN_HEADER: &str = "X-Riot-Token";

/// Client context shared by every component talking to the Riot API.
///
/// All requests go through the same [`RateGate`], so the aggregate request
/// rate stays under the configured quota however many lookups share it.
#[derive(Debug)]
pub struct RiotClient {
    client: reqwest::Client,
    gate: RateGate,
    /// Riot API Key
    key: String,
    platform_url: String,
    regional_url: String,
    metrics: Arc<RequestMetrics>,
}

impl RiotClient {
    pub fn new(settings: ClientSettings) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()?;

        let gate = RateGate::new(settings.rate_limit_requests, settings.rate_limit_interval);
        debug!("[RIOT::CLIENT] one request every {:?}", gate.spacing());

        Ok(Self {
            client,
            gate,
            key: settings.api_key,
            platform_url: trim_base(settings.platform_url),
            regional_url: trim_base(settings.regional_url),
            metrics: RequestMetrics::new(),
        })
    }

    pub fn metrics(&self) -> &Arc<RequestMetrics> {
        &self.metrics
    }

    pub(crate) fn platform_url(&self) -> &str {
        &self.platform_url
    }

    pub(crate) fn regional_url(&self) -> &str {
        &self.regional_url
    }

    /// GET `url` and return the raw body.
    ///
    /// Throttled answers (429) are retried after the server's `Retry-After`
    /// delay or an exponential backoff, up to [`MAX_ATTEMPTS`] attempts in
    /// total. Any other non-success status fails right away.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, AppError> {
        for attempt in 1..=MAX_ATTEMPTS {
            self.gate.acquire().await;
            self.metrics.inc();

            trace!("[RIOT::CLIENT] GET {} (attempt {})", url, attempt);
            let res = self
                .client
                .get(url)
                .header(TOKEN_HEADER, &self.key)
                .send()
                .await?;

            let status = res.status();
            if status == StatusCode::TOO_MANY_REQUESTS {
                self.metrics.inc_throttled();
                if attempt == MAX_ATTEMPTS {
                    break;
                }

                let delay = retry::throttle_delay(res.headers(), attempt);
                warn!(
                    "[RIOT::CLIENT] rate limited on {} (attempt {}/{}), retrying in {:?}",
                    url, attempt, MAX_ATTEMPTS, delay
                );
                tokio::time::sleep(delay).await;
                continue;
            }

            if !status.is_success() {
                let message = res.text().await.unwrap_or_default();
                return Err(AppError::RiotApi {
                    status: status.as_u16(),
                    message,
                });
            }

            return Ok(res.bytes().await?);
        }

        warn!(
            "[RIOT::CLIENT] giving up on {} after {} throttled attempts",
            url, MAX_ATTEMPTS
        );
        Err(AppError::RetryExhausted {
            url: url.to_string(),
            attempts: MAX_ATTEMPTS,
        })
    }

    /// GET `url` and decode the body as `T`. `call` names the endpoint in errors.
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        call: &'static str,
    ) -> Result<T, AppError> {
        let raw = self.fetch(url).await?;
        serde_json::from_slice(&raw).map_err(|source| AppError::MalformedResponse { call, source })
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
