//! HTTP client for talking to the pulsed daemon.

use anyhow::{bail, Context, Result};
use pulse_common::types::{
    AggregateResponse, AggregationRequest, ErrorResponse, HealthResponse, RegionsResponse,
};

/// Default daemon address, matching pulsed's default listen_addr
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8790";

/// Environment variable overriding the daemon base URL
pub const BASE_URL_ENV: &str = "PULSECTL_URL";

pub struct DaemonClient {
    base_url: String,
    http: reqwest::Client,
}

impl DaemonClient {
    /// Resolve the daemon base URL.
    ///
    /// Priority:
    /// 1. Explicit --url flag
    /// 2. $PULSECTL_URL environment variable
    /// 3. http://127.0.0.1:8790 (default)
    pub fn discover_base_url(explicit: Option<String>) -> String {
        if let Some(url) = explicit {
            return url;
        }
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            return url;
        }
        DEFAULT_BASE_URL.to_string()
    }

    pub fn new(explicit_url: Option<String>) -> Self {
        Self {
            base_url: Self::discover_base_url(explicit_url),
            http: reqwest::Client::new(),
        }
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/v1/health", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("daemon unreachable at {}", self.base_url))?;
        Ok(response.error_for_status()?.json().await?)
    }

    pub async fn regions(&self) -> Result<RegionsResponse> {
        let url = format!("{}/v1/regions", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("daemon unreachable at {}", self.base_url))?;
        Ok(response.error_for_status()?.json().await?)
    }

    pub async fn aggregate(&self, request: &AggregationRequest) -> Result<AggregateResponse> {
        let url = format!("{}/v1/telemetry/process", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("daemon unreachable at {}", self.base_url))?;

        if response.status() == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            let err: ErrorResponse = response.json().await.unwrap_or(ErrorResponse {
                error: "telemetry data not available".to_string(),
            });
            bail!("{}", err.error);
        }

        Ok(response.error_for_status()?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_wins_over_default() {
        let url = DaemonClient::discover_base_url(Some("http://10.0.0.1:9999".to_string()));
        assert_eq!(url, "http://10.0.0.1:9999");
    }
}
